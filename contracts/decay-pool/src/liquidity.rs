use crate::guard::ReentrancyGuard;
use crate::shares::{burn, mint};
use crate::storage::{get_config, get_total_supply, get_virtual_balance, set_virtual_balance};
use crate::vault::AssetVault;
use decay_math::{deposit_amount, initial_supply, proportional_supply, scale, withdraw_amount};
use decay_types::{PoolError, Side, BASE_SUPPLY, POOL_ASSETS};
use soroban_sdk::{log, Address, Env, Symbol, Vec};

/// Deposit both assets and mint pool shares
///
/// The first deposit takes the full amounts and mints the largest of them
/// (plus BASE_SUPPLY locked in the pool). Later deposits take only the
/// proportional part of each amount that the scarcer asset allows, and
/// stretch all virtual balances by the supply growth.
pub fn deposit<V: AssetVault>(
    env: &Env,
    vault: &V,
    user: &Address,
    amounts: &Vec<u128>,
    min_amounts: &Vec<u128>,
) -> Result<u128, PoolError> {
    let _guard = ReentrancyGuard::acquire(env)?;

    let config = get_config(env)?;
    let amounts = pair(amounts)?;
    let min_amounts = pair(min_amounts)?;
    if amounts.iter().any(|amount| *amount == 0) {
        return Err(PoolError::InvalidInput);
    }

    let now = env.ledger().timestamp();
    let total_supply = get_total_supply(env);
    let real = [
        vault.balance_of(env, config.token(0)),
        vault.balance_of(env, config.token(1)),
    ];

    let mut fair_supply;
    if total_supply == 0 {
        for index in 0..POOL_ASSETS {
            if amounts[index as usize] < min_amounts[index as usize] {
                return Err(PoolError::SlippageExceeded);
            }
        }

        fair_supply = initial_supply(&amounts);
        for index in 0..POOL_ASSETS {
            vault.pull(env, config.token(index), user, amounts[index as usize])?;
        }
        mint(env, &env.current_contract_address(), BASE_SUPPLY)?;
    } else {
        if real.iter().any(|balance| *balance == 0) {
            return Err(PoolError::InsufficientResult);
        }

        // Pre-compute fair supply from the scarcer asset
        fair_supply = u128::MAX;
        for index in 0..POOL_ASSETS {
            let i = index as usize;
            fair_supply = fair_supply.min(proportional_supply(env, total_supply, amounts[i], real[i]));
        }
        if fair_supply == 0 {
            return Err(PoolError::InsufficientResult);
        }

        let candidate = fair_supply;
        let mut pulls = [0u128; 2];
        for index in 0..POOL_ASSETS {
            let i = index as usize;
            pulls[i] = deposit_amount(env, real[i], candidate, total_supply);
            if pulls[i] < min_amounts[i] {
                return Err(PoolError::SlippageExceeded);
            }
        }

        // Re-derive from what actually arrived
        for index in 0..POOL_ASSETS {
            let i = index as usize;
            let confirmed = vault.pull(env, config.token(index), user, pulls[i])?;
            fair_supply = fair_supply.min(proportional_supply(env, total_supply, confirmed, real[i]));
        }
        if fair_supply == 0 {
            return Err(PoolError::InsufficientResult);
        }

        let stretched = total_supply + fair_supply;
        for index in 0..POOL_ASSETS {
            let i = index as usize;
            for side in [Side::Addition, Side::Removal] {
                let mut vb = get_virtual_balance(env, side, index);
                scale(env, &mut vb, real[i], stretched, total_supply, now);
                set_virtual_balance(env, side, index, &vb);
            }
        }
    }

    mint(env, user, fair_supply)?;

    log!(env, "deposit", fair_supply, total_supply);
    env.events().publish(
        (Symbol::new(env, "deposited"), user.clone()),
        fair_supply,
    );

    Ok(fair_supply)
}

/// Burn `amount` shares and pay out the pro-rata part of both assets
///
/// `min_returns` may hold fewer than two entries; missing entries impose no floor.
pub fn withdraw<V: AssetVault>(
    env: &Env,
    vault: &V,
    user: &Address,
    amount: u128,
    min_returns: &Vec<u128>,
) -> Result<Vec<u128>, PoolError> {
    let _guard = ReentrancyGuard::acquire(env)?;

    let config = get_config(env)?;
    if amount == 0 || min_returns.len() > POOL_ASSETS {
        return Err(PoolError::InvalidInput);
    }

    let now = env.ledger().timestamp();
    let total_supply = get_total_supply(env);
    let mut pre_balances = [0u128; 2];
    let mut values = [0u128; 2];
    for index in 0..POOL_ASSETS {
        let i = index as usize;
        pre_balances[i] = vault.balance_of(env, config.token(index));
        values[i] = if amount <= total_supply {
            withdraw_amount(env, pre_balances[i], amount, total_supply)
        } else {
            0
        };
        if let Some(min_return) = min_returns.get(index) {
            if values[i] < min_return {
                return Err(PoolError::SlippageExceeded);
            }
        }
    }

    burn(env, user, amount)?;

    let remaining = total_supply - amount;
    let mut returned = Vec::new(env);
    for index in 0..POOL_ASSETS {
        let i = index as usize;
        vault.push(env, config.token(index), user, values[i])?;

        for side in [Side::Addition, Side::Removal] {
            let mut vb = get_virtual_balance(env, side, index);
            scale(env, &mut vb, pre_balances[i], remaining, total_supply, now);
            set_virtual_balance(env, side, index, &vb);
        }
        returned.push_back(values[i]);
    }

    log!(env, "withdraw", amount, remaining);
    env.events().publish(
        (Symbol::new(env, "withdrawn"), user.clone()),
        (amount, returned.clone()),
    );

    Ok(returned)
}

/// Exactly two entries, one per asset
fn pair(values: &Vec<u128>) -> Result<[u128; 2], PoolError> {
    if values.len() != POOL_ASSETS {
        return Err(PoolError::InvalidInput);
    }
    match (values.get(0), values.get(1)) {
        (Some(first), Some(second)) => Ok([first, second]),
        _ => Err(PoolError::InvalidInput),
    }
}
