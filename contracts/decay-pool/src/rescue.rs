use crate::guard::ReentrancyGuard;
use crate::storage::get_config;
use crate::vault::AssetVault;
use decay_types::{PoolError, POOL_ASSETS};
use soroban_sdk::{log, Address, Env, Symbol};

/// Send `amount` of a stray `token` to the pool owner
///
/// Fails with `AccessDenied` when the transfer reduced the balance of either
/// pool asset.
pub fn rescue_funds<V: AssetVault>(
    env: &Env,
    vault: &V,
    token: &Address,
    amount: u128,
) -> Result<(), PoolError> {
    let _guard = ReentrancyGuard::acquire(env)?;

    let config = get_config(env)?;
    let mut before = [0u128; 2];
    for index in 0..POOL_ASSETS {
        before[index as usize] = vault.balance_of(env, config.token(index));
    }

    vault.push(env, token, &config.owner, amount)?;

    for index in 0..POOL_ASSETS {
        if vault.balance_of(env, config.token(index)) < before[index as usize] {
            return Err(PoolError::AccessDenied);
        }
    }

    log!(env, "rescue", amount);
    env.events().publish(
        (Symbol::new(env, "rescued"), token.clone()),
        amount,
    );
    Ok(())
}
