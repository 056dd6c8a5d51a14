// ============================================================================
// LIQUIDITY INVARIANT SPECIFICATIONS
// ============================================================================
//
// Share accounting rules, checked against contract storage and the share
// math used by deposit and withdraw.
//
// ============================================================================

use crate::invariants::{shares_conserved, withdrawal_within_share};
use crate::shares::{burn, mint, transfer};
use crate::storage::{get_shares, get_total_supply};
use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;
use decay_math::{deposit_amount, proportional_supply, withdraw_amount};
use soroban_sdk::{Address, Env};

const BOUND: u128 = 1u128 << 100;

/// RULE: Minting increases balance and supply by the same amount
#[rule]
pub fn mint_tracks_supply(env: Env, holder: Address, amount: u128) {
    cvlr_assume!(get_total_supply(&env) < BOUND && amount < BOUND);
    cvlr_assume!(get_shares(&env, &holder) == 0 && get_total_supply(&env) == 0);

    let result = mint(&env, &holder, amount);
    cvlr_assert!(result.is_ok());
    cvlr_assert!(shares_conserved(get_total_supply(&env), &[get_shares(&env, &holder)]));
}

/// RULE: Burning more than the balance fails and leaves state untouched
#[rule]
pub fn burn_guarded(env: Env, holder: Address, amount: u128) {
    let balance = get_shares(&env, &holder);
    let supply = get_total_supply(&env);
    cvlr_assume!(balance <= supply);
    cvlr_assume!(amount > balance);

    cvlr_assert!(burn(&env, &holder, amount).is_err());
    cvlr_assert!(get_shares(&env, &holder) == balance);
    cvlr_assert!(get_total_supply(&env) == supply);
}

/// RULE: Transfers never change the total supply
#[rule]
pub fn transfer_preserves_supply(env: Env, from: Address, to: Address, amount: u128) {
    cvlr_assume!(get_shares(&env, &to) < BOUND && amount < BOUND);
    let supply = get_total_supply(&env);
    let _ = transfer(&env, &from, &to, amount);
    cvlr_assert!(get_total_supply(&env) == supply);
}

/// RULE: Withdrawals never pay more than the pro-rata part
#[rule]
pub fn withdraw_within_share(env: Env, real: u128, shares: u128, total_supply: u128) {
    cvlr_assume!(total_supply > 0 && shares <= total_supply);
    cvlr_assume!(real < BOUND && total_supply < BOUND);
    let value = withdraw_amount(&env, real, shares, total_supply);
    cvlr_assert!(withdrawal_within_share(&env, value, real, shares, total_supply));
}

/// RULE: The deposit pull covers the shares it buys
#[rule]
pub fn deposit_pays_for_shares(env: Env, real: u128, fair_supply: u128, total_supply: u128) {
    cvlr_assume!(total_supply > 0 && real > 0);
    cvlr_assume!(real < BOUND && fair_supply < BOUND && total_supply < BOUND);
    let paid = deposit_amount(&env, real, fair_supply, total_supply);
    cvlr_assert!(proportional_supply(&env, total_supply, paid, real) >= fair_supply);
}
