use crate::guard::ReentrancyGuard;
use crate::shares::mint;
use crate::storage::{get_config, get_total_supply, get_virtual_balance, set_virtual_balance};
use crate::vault::AssetVault;
use decay_math::{balance_for_addition, balance_for_removal, get_return, referral_share, set, update};
use decay_types::{PoolConfig, PoolError, Side, SwapBalances};
use soroban_sdk::{log, Address, Env, Symbol};

/// Storage indexes of a distinct, registered asset pair
pub fn resolve_pair(config: &PoolConfig, src: &Address, dst: &Address) -> Result<(u32, u32), PoolError> {
    match (config.index_of(src), config.index_of(dst)) {
        (Some(src_index), Some(dst_index)) if src_index != dst_index => Ok((src_index, dst_index)),
        _ => Err(PoolError::InvalidInput),
    }
}

/// Real and pricing balances of the pair at `now`
pub fn snapshot<V: AssetVault>(
    env: &Env,
    vault: &V,
    config: &PoolConfig,
    src_index: u32,
    dst_index: u32,
    now: u64,
) -> SwapBalances {
    let real_src = vault.balance_of(env, config.token(src_index));
    let real_dst = vault.balance_of(env, config.token(dst_index));

    SwapBalances {
        real_src,
        real_dst,
        src_addition: balance_for_addition(
            env,
            &get_virtual_balance(env, Side::Addition, src_index),
            real_src,
            now,
        ),
        dst_removal: balance_for_removal(
            env,
            &get_virtual_balance(env, Side::Removal, dst_index),
            real_dst,
            now,
        ),
    }
}

/// Expected output of swapping `amount` of `src` for `dst`
///
/// Returns 0 instead of failing for an unknown or identical pair and for a
/// zero amount. Does not take the lock, so it can be called mid-operation.
pub fn quote<V: AssetVault>(
    env: &Env,
    vault: &V,
    config: &PoolConfig,
    src: &Address,
    dst: &Address,
    amount: u128,
    fee: u128,
) -> u128 {
    let Ok((src_index, dst_index)) = resolve_pair(config, src, dst) else {
        return 0;
    };
    if amount == 0 {
        return 0;
    }

    let balances = snapshot(env, vault, config, src_index, dst_index, env.ledger().timestamp());
    get_return(env, amount, balances.src_addition, balances.dst_removal, fee)
}

/// Execute a swap of `amount` of `src` for at least `min_return` of `dst`
///
/// Pricing uses the virtual balances taken before the input transfer, applied
/// to the amount actually received. After paying out, the same-direction
/// virtual balances follow the trade only if they had not converged yet, and
/// the opposite-direction ones are re-anchored at the pre-trade balances so a
/// reverse trade keeps seeing the old price while it decays.
#[allow(clippy::too_many_arguments)]
pub fn execute_swap<V: AssetVault>(
    env: &Env,
    vault: &V,
    user: &Address,
    src: &Address,
    dst: &Address,
    amount: u128,
    min_return: u128,
    referral: Option<Address>,
    fee: u128,
) -> Result<u128, PoolError> {
    let _guard = ReentrancyGuard::acquire(env)?;

    let config = get_config(env)?;
    let (src_index, dst_index) = resolve_pair(&config, src, dst)?;
    if amount == 0 {
        return Err(PoolError::InvalidInput);
    }

    let now = env.ledger().timestamp();
    let balances = snapshot(env, vault, &config, src_index, dst_index, now);

    let confirmed = vault.pull(env, src, user, amount)?;
    let result = get_return(env, confirmed, balances.src_addition, balances.dst_removal, fee);
    if result == 0 {
        return Err(PoolError::InsufficientResult);
    }
    if result < min_return {
        return Err(PoolError::SlippageExceeded);
    }

    vault.push(env, dst, user, result)?;

    // Same direction, only while imbalanced
    if balances.src_imbalanced() {
        let mut vb = get_virtual_balance(env, Side::Addition, src_index);
        set(&mut vb, balances.src_addition + confirmed, now);
        set_virtual_balance(env, Side::Addition, src_index, &vb);
    }
    if balances.dst_imbalanced() {
        let mut vb = get_virtual_balance(env, Side::Removal, dst_index);
        set(&mut vb, balances.dst_removal - result, now);
        set_virtual_balance(env, Side::Removal, dst_index, &vb);
    }

    // Opposite direction
    let mut vb = get_virtual_balance(env, Side::Removal, src_index);
    update(env, &mut vb, balances.real_src, now);
    set_virtual_balance(env, Side::Removal, src_index, &vb);

    let mut vb = get_virtual_balance(env, Side::Addition, dst_index);
    update(env, &mut vb, balances.real_dst, now);
    set_virtual_balance(env, Side::Addition, dst_index, &vb);

    if let Some(referral) = &referral {
        let share = referral_share(
            env,
            balances.real_src,
            confirmed,
            balances.real_dst,
            result,
            get_total_supply(env),
        );
        if share > 0 {
            mint(env, referral, share)?;
            env.events().publish(
                (Symbol::new(env, "referral"), referral.clone()),
                share,
            );
        }
    }

    log!(env, "swap", src_index, confirmed, result);
    env.events().publish(
        (Symbol::new(env, "swapped"), user.clone()),
        (src.clone(), dst.clone(), confirmed, result, referral),
    );

    Ok(result)
}
