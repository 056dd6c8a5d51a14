// ============================================================================
// MATH INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Decayed value lies between the stored and the real balance
// 2. Decay is complete after DECAY_PERIOD
// 3. Pricing balances bracket the real balance
// 4. Scaling rounds up, never below the exact ratio
//
// ============================================================================

use crate::invariants::{current_between_endpoints, pricing_balances_bracket_real};
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;
use decay_math::{balance_for_addition, balance_for_removal, current, scale};
use decay_types::{VirtualBalance, DECAY_PERIOD};
use soroban_sdk::Env;

/// RULE: Sanity check - decay computation is reachable
#[rule]
pub fn sanity_current(env: Env, balance: u128, time: u64, real: u128, now: u64) {
    let vb = VirtualBalance::new(balance, time);
    let _value = current(&env, &vb, real, now);
    cvlr_satisfy!(true);
}

/// RULE: Decayed value is bounded by its endpoints
#[rule]
pub fn current_is_blend(env: Env, balance: u128, time: u64, real: u128, now: u64) {
    let vb = VirtualBalance::new(balance, time);
    let value = current(&env, &vb, real, now);
    cvlr_assert!(current_between_endpoints(balance, real, value));
}

/// RULE: After a full period only the real balance remains
#[rule]
pub fn current_converges(env: Env, balance: u128, time: u64, real: u128, now: u64) {
    cvlr_assume!(now >= time);
    cvlr_assume!(now - time >= DECAY_PERIOD);
    let vb = VirtualBalance::new(balance, time);
    cvlr_assert!(current(&env, &vb, real, now) == real);
}

/// RULE: A fresh write reads back unchanged
#[rule]
pub fn current_fresh_write(env: Env, balance: u128, real: u128, now: u64) {
    let vb = VirtualBalance::new(balance, now);
    cvlr_assert!(current(&env, &vb, real, now) == balance);
}

/// RULE: Addition and removal balances bracket the real balance
#[rule]
pub fn pricing_balances_bracket(
    env: Env,
    addition_balance: u128,
    removal_balance: u128,
    time: u64,
    real: u128,
    now: u64,
) {
    let addition = balance_for_addition(&env, &VirtualBalance::new(addition_balance, time), real, now);
    let removal = balance_for_removal(&env, &VirtualBalance::new(removal_balance, time), real, now);
    cvlr_assert!(pricing_balances_bracket_real(addition, removal, real));
}

/// RULE: Scaling up by a ratio >= 1 never shrinks the value
#[rule]
pub fn scale_up_not_smaller(env: Env, balance: u128, real: u128, numerator: u128, denominator: u128, now: u64) {
    cvlr_assume!(denominator > 0 && numerator >= denominator);
    cvlr_assume!(balance <= u64::MAX as u128 && real <= u64::MAX as u128);
    cvlr_assume!(numerator <= u64::MAX as u128);

    let mut vb = VirtualBalance::new(balance, now);
    scale(&env, &mut vb, real, numerator, denominator, now);
    cvlr_assert!(vb.balance >= balance);
    cvlr_assert!(vb.time == now);
}
