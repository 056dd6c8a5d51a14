// ============================================================================
// POOL STATE INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A pool initializes exactly once, with two distinct assets
// 2. The lock is released after every guarded section
// 3. A held lock rejects a second guard
//
// ============================================================================

use crate::guard::ReentrancyGuard;
use crate::invariants::lock_released;
use crate::storage::set_locked;
use crate::DecayPool;
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;
use decay_types::PoolError;
use soroban_sdk::{Address, Env, String};

/// RULE: Initialization stores the given assets
#[rule]
pub fn initialize_sets_tokens(
    env: Env,
    factory: Address,
    owner: Address,
    token0: Address,
    token1: Address,
) {
    cvlr_assume!(token0 != token1);
    let name = String::from_str(&env, "pool");
    let symbol = String::from_str(&env, "POOL");

    let result = DecayPool::initialize(
        env.clone(),
        factory,
        owner,
        token0.clone(),
        token1.clone(),
        name,
        symbol,
    );
    cvlr_assume!(result.is_ok());

    cvlr_assert!(DecayPool::is_token(env.clone(), token0));
    cvlr_assert!(DecayPool::is_token(env, token1));
}

/// RULE: Identical assets are rejected
#[rule]
pub fn initialize_rejects_identical(env: Env, factory: Address, owner: Address, token: Address) {
    let name = String::from_str(&env, "pool");
    let symbol = String::from_str(&env, "POOL");
    let result = DecayPool::initialize(env, factory, owner, token.clone(), token, name, symbol);
    cvlr_assert!(result == Err(PoolError::InvalidInput));
}

/// RULE: Dropping the guard releases the lock
#[rule]
pub fn guard_releases_lock(env: Env) {
    set_locked(&env, false);
    {
        let guard = ReentrancyGuard::acquire(&env);
        cvlr_assume!(guard.is_ok());
        cvlr_satisfy!(!lock_released(&env));
    }
    cvlr_assert!(lock_released(&env));
}

/// RULE: A held lock rejects a nested guard
#[rule]
pub fn held_lock_rejects(env: Env) {
    set_locked(&env, true);
    cvlr_assert!(ReentrancyGuard::acquire(&env).err() == Some(PoolError::Reentrancy));
}
