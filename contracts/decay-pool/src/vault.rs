use decay_types::PoolError;
use soroban_sdk::{token, Address, Env};

/// Token movements the pool depends on
///
/// Amounts received are always measured by balance delta, so assets that
/// charge a fee on transfer report less than requested.
pub trait AssetVault {
    /// Pool's real balance of `asset`
    fn balance_of(&self, env: &Env, asset: &Address) -> u128;

    /// Move `amount` of `asset` from `from` into the pool, returns the amount received
    fn pull(&self, env: &Env, asset: &Address, from: &Address, amount: u128) -> Result<u128, PoolError>;

    /// Move `amount` of `asset` from the pool to `to`
    fn push(&self, env: &Env, asset: &Address, to: &Address, amount: u128) -> Result<(), PoolError>;
}

/// Vault backed by Soroban token contracts (including the native asset contract)
pub struct TokenVault;

impl AssetVault for TokenVault {
    fn balance_of(&self, env: &Env, asset: &Address) -> u128 {
        let balance = token::Client::new(env, asset).balance(&env.current_contract_address());
        u128::try_from(balance).unwrap_or(0)
    }

    fn pull(&self, env: &Env, asset: &Address, from: &Address, amount: u128) -> Result<u128, PoolError> {
        let before = self.balance_of(env, asset);
        if amount > 0 {
            token::Client::new(env, asset).transfer(
                from,
                &env.current_contract_address(),
                &to_token_amount(amount)?,
            );
        }
        Ok(self.balance_of(env, asset).saturating_sub(before))
    }

    fn push(&self, env: &Env, asset: &Address, to: &Address, amount: u128) -> Result<(), PoolError> {
        if amount > 0 {
            token::Client::new(env, asset).transfer(
                &env.current_contract_address(),
                to,
                &to_token_amount(amount)?,
            );
        }
        Ok(())
    }
}

/// Token interface amounts are signed
pub fn to_token_amount(amount: u128) -> Result<i128, PoolError> {
    i128::try_from(amount).map_err(|_| PoolError::Overflow)
}
