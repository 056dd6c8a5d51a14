// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates over pool state that must hold after every operation. Shared by
// the unit tests below and the Certora rules under `certora_specs/`.
//
// INVARIANT CATEGORIES:
//
// 1. VIRTUAL BALANCE INVARIANTS
//    - Addition-side balance never below the real balance
//    - Removal-side balance never above the real balance
//    - Decayed value lies between the stored and the real balance
//
// 2. PRICING INVARIANTS
//    - A quote never drains the output side
//    - A trade never shrinks the real balance product
//
// 3. SHARE INVARIANTS
//    - Holder balances add up to the total supply
//    - Withdrawals never exceed the pro-rata amount
//
// 4. CONFIGURATION INVARIANTS
//    - Fee within [0, MAX_FEE]
//    - Lock released between operations
//
// ============================================================================

use crate::storage::is_locked;
use decay_types::MAX_FEE;
use soroban_sdk::{Env, U256};

// ============================================================================
// VIRTUAL BALANCE INVARIANTS
// ============================================================================

/// Invariant: pricing balances bracket the real balance
///
/// Property:
///   removal <= real <= addition
pub fn pricing_balances_bracket_real(addition: u128, removal: u128, real: u128) -> bool {
    removal <= real && real <= addition
}

/// Invariant: the decayed value is a blend of its endpoints
///
/// Property:
///   min(stored, real) <= current <= max(stored, real)
pub fn current_between_endpoints(stored: u128, real: u128, current: u128) -> bool {
    stored.min(real) <= current && current <= stored.max(real)
}

// ============================================================================
// PRICING INVARIANTS
// ============================================================================

/// Invariant: output stays below the removal balance
///
/// Property:
///   dst_balance == 0 || result < dst_balance
pub fn quote_below_reserve(result: u128, dst_balance: u128) -> bool {
    dst_balance == 0 || result < dst_balance
}

/// Invariant: real balance product never decreases across a swap
///
/// Property:
///   src_after * dst_after >= src_before * dst_before
pub fn product_non_decreasing(
    env: &Env,
    before: (u128, u128),
    after: (u128, u128),
) -> bool {
    let product = |(a, b): (u128, u128)| U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    product(after) >= product(before)
}

// ============================================================================
// SHARE INVARIANTS
// ============================================================================

/// Invariant: share balances account for the whole supply
pub fn shares_conserved(total_supply: u128, holder_balances: &[u128]) -> bool {
    holder_balances
        .iter()
        .try_fold(0u128, |sum, balance| sum.checked_add(*balance))
        == Some(total_supply)
}

/// Invariant: a withdrawal pays at most its pro-rata part
///
/// Property:
///   value * total_supply <= real * shares
pub fn withdrawal_within_share(
    env: &Env,
    value: u128,
    real: u128,
    shares: u128,
    total_supply: u128,
) -> bool {
    let paid = U256::from_u128(env, value).mul(&U256::from_u128(env, total_supply));
    let owed = U256::from_u128(env, real).mul(&U256::from_u128(env, shares));
    paid <= owed
}

// ============================================================================
// CONFIGURATION INVARIANTS
// ============================================================================

/// Invariant: fee is within valid range
pub fn fee_valid(fee: u128) -> bool {
    fee <= MAX_FEE
}

/// Invariant: no operation left the lock held
pub fn lock_released(env: &Env) -> bool {
    !is_locked(env)
}

// ============================================================================
// TESTS
// ============================================================================
