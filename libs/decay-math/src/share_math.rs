use crate::full_math::{mul_div, mul_div_rounding_up};
use decay_types::BASE_SUPPLY;
use soroban_sdk::Env;

/// Shares minted by the first deposit: the largest amount, at least 99x BASE_SUPPLY
pub fn initial_supply(amounts: &[u128; 2]) -> u128 {
    (BASE_SUPPLY * 99).max(amounts[0]).max(amounts[1])
}

/// Shares worth `amount` of an asset the pool holds `real_balance` of (rounds down)
pub fn proportional_supply(env: &Env, total_supply: u128, amount: u128, real_balance: u128) -> u128 {
    mul_div(env, total_supply, amount, real_balance)
}

/// Amount a depositor pays for `fair_supply` new shares (rounds up, in favor of the pool)
pub fn deposit_amount(env: &Env, real_balance: u128, fair_supply: u128, total_supply: u128) -> u128 {
    mul_div_rounding_up(env, real_balance, fair_supply, total_supply)
}

/// Amount paid out for burning `shares` (rounds down, in favor of the pool)
pub fn withdraw_amount(env: &Env, real_balance: u128, shares: u128, total_supply: u128) -> u128 {
    mul_div(env, real_balance, shares, total_supply)
}
