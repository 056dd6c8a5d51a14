use crate::full_math::{mul_div_rounding_up, u128_from_u256};
use decay_types::{VirtualBalance, DECAY_PERIOD};
use soroban_sdk::{Env, U256};

/// Time-weighted blend of a stored virtual balance and the real balance
///
/// The stored value fades out linearly over `DECAY_PERIOD`; afterwards the
/// real balance is returned exactly. A `time` in the future counts as no
/// time passed.
pub fn current(env: &Env, vb: &VirtualBalance, real_balance: u128, now: u64) -> u128 {
    let time_passed = now.saturating_sub(vb.time).min(DECAY_PERIOD);
    let time_remain = DECAY_PERIOD - time_passed;

    let stored = U256::from_u128(env, vb.balance).mul(&U256::from_u128(env, time_remain as u128));
    let real = U256::from_u128(env, real_balance).mul(&U256::from_u128(env, time_passed as u128));
    let blended = stored.add(&real).div(&U256::from_u128(env, DECAY_PERIOD as u128));

    u128_from_u256(env, &blended)
}

/// Overwrite the stored balance and restart the decay window
pub fn set(vb: &mut VirtualBalance, balance: u128, now: u64) {
    vb.balance = balance;
    vb.time = now;
}

/// Re-anchor at the currently decayed value
pub fn update(env: &Env, vb: &mut VirtualBalance, real_balance: u128, now: u64) {
    let balance = current(env, vb, real_balance, now);
    set(vb, balance, now);
}

/// Stretch the decayed value by `numerator / denominator` (rounds up)
pub fn scale(
    env: &Env,
    vb: &mut VirtualBalance,
    real_balance: u128,
    numerator: u128,
    denominator: u128,
    now: u64,
) {
    let balance = mul_div_rounding_up(
        env,
        current(env, vb, real_balance, now),
        numerator,
        denominator,
    );
    set(vb, balance, now);
}

/// Pricing balance of an incoming asset, never below the real balance
pub fn balance_for_addition(env: &Env, vb: &VirtualBalance, real_balance: u128, now: u64) -> u128 {
    current(env, vb, real_balance, now).max(real_balance)
}

/// Pricing balance of an outgoing asset, never above the real balance
pub fn balance_for_removal(env: &Env, vb: &VirtualBalance, real_balance: u128, now: u64) -> u128 {
    current(env, vb, real_balance, now).min(real_balance)
}
