use crate::storage::{get_shares, get_total_supply, set_shares, set_total_supply};
use decay_types::PoolError;
use soroban_sdk::{Address, Env};

/// Create `amount` shares for `to`
pub fn mint(env: &Env, to: &Address, amount: u128) -> Result<(), PoolError> {
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    let balance = get_shares(env, to) + amount;

    set_total_supply(env, supply);
    set_shares(env, to, balance);
    Ok(())
}

/// Destroy `amount` of `from`'s shares
pub fn burn(env: &Env, from: &Address, amount: u128) -> Result<(), PoolError> {
    let balance = get_shares(env, from);
    if balance < amount {
        return Err(PoolError::InsufficientShares);
    }

    set_shares(env, from, balance - amount);
    set_total_supply(env, get_total_supply(env) - amount);
    Ok(())
}

/// Move shares between holders, total supply unchanged
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), PoolError> {
    let from_balance = get_shares(env, from);
    if from_balance < amount {
        return Err(PoolError::InsufficientShares);
    }
    if from == to {
        return Ok(());
    }

    set_shares(env, from, from_balance - amount);
    set_shares(env, to, get_shares(env, to) + amount);
    Ok(())
}
