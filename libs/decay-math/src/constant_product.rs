use crate::full_math::{mul_div, sqrt, u128_from_u256};
use decay_types::{FEE_DENOMINATOR, ONE, ONE_SQUARED, REFERRAL_SHARE};
use soroban_sdk::{Env, U256};

/// Input amount left after the swap fee (fee rounds down)
pub fn taxed_amount(env: &Env, amount: u128, fee: u128) -> u128 {
    amount - mul_div(env, amount, fee, FEE_DENOMINATOR)
}

/// Output of a constant-product trade
///
/// `result = taxed * dst_balance / (src_balance + taxed)`, rounded down.
/// With a non-empty source side the output stays strictly below `dst_balance`.
pub fn get_return(
    env: &Env,
    amount: u128,
    src_balance: u128,
    dst_balance: u128,
    fee: u128,
) -> u128 {
    let taxed = taxed_amount(env, amount, fee);
    match src_balance.checked_add(taxed) {
        Some(0) => 0,
        Some(denominator) => mul_div(env, taxed, dst_balance, denominator),
        None => panic!("Balance overflow"),
    }
}

/// Shares owed to a referral for the invariant growth of one swap
///
/// The growth ratio `(src + in) / src * (dst - out) / dst` is evaluated in
/// 1e36 fixed point; when above one, the referral gets
/// `(sqrt(ratio) - 1) * total_supply / REFERRAL_SHARE`.
pub fn referral_share(
    env: &Env,
    real_src: u128,
    confirmed: u128,
    real_dst: u128,
    result: u128,
    total_supply: u128,
) -> u128 {
    if real_src == 0 || real_dst == 0 || result > real_dst {
        return 0;
    }

    let one_squared = U256::from_u128(env, ONE_SQUARED);
    let src_after = U256::from_u128(env, real_src).add(&U256::from_u128(env, confirmed));

    let ratio = one_squared
        .mul(&src_after)
        .div(&U256::from_u128(env, real_src))
        .mul(&U256::from_u128(env, real_dst - result))
        .div(&U256::from_u128(env, real_dst));

    if ratio <= one_squared {
        return 0;
    }

    let one = U256::from_u128(env, ONE);
    let share = sqrt(env, &ratio)
        .sub(&one)
        .mul(&U256::from_u128(env, total_supply))
        .div(&one)
        .div(&U256::from_u128(env, REFERRAL_SHARE));

    u128_from_u256(env, &share)
}
