#![no_std]

#[cfg(feature = "certora")]
mod certora_specs;
mod fee;
mod guard;
#[cfg(any(test, feature = "certora"))]
mod invariants;
mod liquidity;
mod rescue;
mod shares;
mod storage;
mod swap;
#[cfg(test)]
mod testutils;
mod vault;

use decay_math::{balance_for_addition, balance_for_removal};
use decay_types::{PoolConfig, PoolError, Side, VirtualBalance, DECAY_PERIOD};
use soroban_sdk::{contract, contractimpl, log, vec, Address, Env, String, Vec};
use storage::{
    get_config, get_shares, get_total_supply, get_virtual_balance, has_config, is_locked,
    set_config,
};
use vault::{AssetVault, TokenVault};

#[contract]
pub struct DecayPool;

#[contractimpl]
impl DecayPool {
    /// Initialize a new pool for two distinct assets
    ///
    /// Called by the factory right after deployment. `owner` may rescue
    /// stray tokens; `factory` supplies the swap fee.
    pub fn initialize(
        env: Env,
        factory: Address,
        owner: Address,
        token0: Address,
        token1: Address,
        name: String,
        symbol: String,
    ) -> Result<(), PoolError> {
        if has_config(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token0 == token1 || name.len() == 0 || symbol.len() == 0 {
            return Err(PoolError::InvalidInput);
        }

        let config = PoolConfig {
            factory,
            owner,
            token0,
            token1,
            name,
            symbol,
        };
        set_config(&env, &config);

        log!(&env, "pool initialized", config.token0, config.token1);
        Ok(())
    }

    /// Expected output for swapping `amount` of `src` into `dst`
    ///
    /// Returns 0 for an unknown or identical pair and for a zero amount.
    pub fn get_return(env: Env, src: Address, dst: Address, amount: u128) -> u128 {
        let Ok(config) = get_config(&env) else {
            return 0;
        };
        if !config.is_token(&src) || !config.is_token(&dst) || amount == 0 {
            return 0;
        }
        let fee = fee::current_fee(&env, &config);
        swap::quote(&env, &TokenVault, &config, &src, &dst, amount, fee)
    }

    /// Swap `amount` of `src` for at least `min_return` of `dst`
    ///
    /// # Arguments
    /// * `user` - Pays `src` and receives `dst`
    /// * `referral` - Receives a share of the fee as newly minted pool shares
    ///
    /// # Returns
    /// Amount of `dst` paid out
    pub fn swap(
        env: Env,
        user: Address,
        src: Address,
        dst: Address,
        amount: u128,
        min_return: u128,
        referral: Option<Address>,
    ) -> Result<u128, PoolError> {
        user.require_auth();
        let config = get_config(&env)?;
        let fee = fee::current_fee(&env, &config);
        swap::execute_swap(&env, &TokenVault, &user, &src, &dst, amount, min_return, referral, fee)
    }

    /// Deposit both assets, returns the shares minted
    ///
    /// `amounts` and `min_amounts` are indexed like `tokens()`.
    pub fn deposit(
        env: Env,
        user: Address,
        amounts: Vec<u128>,
        min_amounts: Vec<u128>,
    ) -> Result<u128, PoolError> {
        user.require_auth();
        liquidity::deposit(&env, &TokenVault, &user, &amounts, &min_amounts)
    }

    /// Burn `amount` shares, returns the asset amounts paid out
    pub fn withdraw(
        env: Env,
        user: Address,
        amount: u128,
        min_returns: Vec<u128>,
    ) -> Result<Vec<u128>, PoolError> {
        user.require_auth();
        liquidity::withdraw(&env, &TokenVault, &user, amount, &min_returns)
    }

    /// Move pool shares between accounts
    pub fn transfer(env: Env, from: Address, to: Address, amount: u128) -> Result<(), PoolError> {
        from.require_auth();
        shares::transfer(&env, &from, &to, amount)
    }

    /// Send tokens that are not pool assets to the owner
    pub fn rescue_funds(env: Env, token: Address, amount: u128) -> Result<(), PoolError> {
        let config = get_config(&env)?;
        config.owner.require_auth();
        rescue::rescue_funds(&env, &TokenVault, &token, amount)
    }

    // === View Functions ===

    /// Pricing balance of `asset` when it is sold into the pool
    pub fn get_balance_for_addition(env: Env, asset: Address) -> Result<u128, PoolError> {
        let (index, real) = Self::real_balance(&env, &asset)?;
        let vb = get_virtual_balance(&env, Side::Addition, index);
        Ok(balance_for_addition(&env, &vb, real, env.ledger().timestamp()))
    }

    /// Pricing balance of `asset` when it is bought from the pool
    pub fn get_balance_for_removal(env: Env, asset: Address) -> Result<u128, PoolError> {
        let (index, real) = Self::real_balance(&env, &asset)?;
        let vb = get_virtual_balance(&env, Side::Removal, index);
        Ok(balance_for_removal(&env, &vb, real, env.ledger().timestamp()))
    }

    /// Stored virtual balance record
    pub fn virtual_balance(env: Env, side: Side, asset: Address) -> Result<VirtualBalance, PoolError> {
        let index = get_config(&env)?
            .index_of(&asset)
            .ok_or(PoolError::InvalidInput)?;
        Ok(get_virtual_balance(&env, side, index))
    }

    pub fn decay_period(_env: Env) -> u64 {
        DECAY_PERIOD
    }

    pub fn total_supply(env: Env) -> u128 {
        get_total_supply(&env)
    }

    /// Share balance of `account`
    pub fn balance(env: Env, account: Address) -> u128 {
        get_shares(&env, &account)
    }

    /// Pool assets, in storage order
    pub fn tokens(env: Env) -> Result<Vec<Address>, PoolError> {
        let config = get_config(&env)?;
        Ok(vec![&env, config.token0, config.token1])
    }

    pub fn is_token(env: Env, asset: Address) -> bool {
        get_config(&env)
            .map(|config| config.is_token(&asset))
            .unwrap_or(false)
    }

    /// Current swap fee in units of 1e18
    pub fn fee(env: Env) -> Result<u128, PoolError> {
        let config = get_config(&env)?;
        Ok(fee::current_fee(&env, &config))
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        get_config(&env)
    }

    pub fn is_locked(env: Env) -> bool {
        is_locked(&env)
    }
}

impl DecayPool {
    fn real_balance(env: &Env, asset: &Address) -> Result<(u32, u128), PoolError> {
        let config = get_config(env)?;
        let index = config.index_of(asset).ok_or(PoolError::InvalidInput)?;
        Ok((index, TokenVault.balance_of(env, asset)))
    }
}
