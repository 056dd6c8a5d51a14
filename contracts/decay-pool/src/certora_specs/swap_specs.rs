// ============================================================================
// SWAP INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Output never drains the removal balance
// 2. Output is monotonic in the input amount
// 3. A fee never increases the output
// 4. Pricing on virtual balances never shrinks the real product
//
// ============================================================================

use crate::invariants::{product_non_decreasing, quote_below_reserve};
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;
use decay_math::get_return;
use decay_types::MAX_FEE;
use soroban_sdk::Env;

const BOUND: u128 = 1u128 << 100;

/// RULE: Sanity check - a non-zero return is reachable
#[rule]
pub fn sanity_get_return(env: Env, amount: u128, src: u128, dst: u128) {
    cvlr_assume!(amount < BOUND && src < BOUND && dst < BOUND);
    let result = get_return(&env, amount, src, dst, 0);
    cvlr_satisfy!(result > 0);
}

/// RULE: Output stays below the destination balance
#[rule]
pub fn return_below_reserve(env: Env, amount: u128, src: u128, dst: u128, fee: u128) {
    cvlr_assume!(amount < BOUND && src < BOUND && dst < BOUND);
    cvlr_assume!(src > 0 && fee <= MAX_FEE);
    let result = get_return(&env, amount, src, dst, fee);
    cvlr_assert!(quote_below_reserve(result, dst));
}

/// RULE: More input never yields less output
#[rule]
pub fn return_monotonic(env: Env, small: u128, large: u128, src: u128, dst: u128) {
    cvlr_assume!(small <= large);
    cvlr_assume!(large < BOUND && src < BOUND && dst < BOUND);
    cvlr_assert!(get_return(&env, small, src, dst, 0) <= get_return(&env, large, src, dst, 0));
}

/// RULE: Charging a fee never increases the output
#[rule]
pub fn fee_reduces_return(env: Env, amount: u128, src: u128, dst: u128, fee: u128) {
    cvlr_assume!(amount < BOUND && src < BOUND && dst < BOUND);
    cvlr_assume!(fee <= MAX_FEE);
    cvlr_assert!(get_return(&env, amount, src, dst, fee) <= get_return(&env, amount, src, dst, 0));
}

/// RULE: Trading on bracketing balances grows the real product
#[rule]
pub fn real_product_grows(
    env: Env,
    amount: u128,
    real_src: u128,
    real_dst: u128,
    src_addition: u128,
    dst_removal: u128,
    fee: u128,
) {
    cvlr_assume!(amount < BOUND && src_addition < BOUND && real_dst < BOUND);
    cvlr_assume!(src_addition >= real_src && dst_removal <= real_dst);
    cvlr_assume!(fee <= MAX_FEE);

    let result = get_return(&env, amount, src_addition, dst_removal, fee);
    cvlr_assert!(product_non_decreasing(
        &env,
        (real_src, real_dst),
        (real_src + amount, real_dst - result)
    ));
}
