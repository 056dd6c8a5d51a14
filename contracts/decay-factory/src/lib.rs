#![no_std]

use decay_types::MAX_FEE;
use soroban_sdk::{
    contract, contractimpl, contracttype, log, Address, BytesN, Env, IntoVal, String, Symbol, Vec,
};

#[contract]
pub struct DecayFactory;

/// Storage keys for Factory contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address, also the owner of every deployed pool
    Admin,
    /// Pool WASM hash for deployment
    PoolWasmHash,
    /// Swap fee read by all pools (units of FEE_DENOMINATOR)
    Fee,
    /// (token0, token1) -> pool address
    Pool(Address, Address),
    /// Total number of pools created (counter for indexed storage)
    PoolCount,
    /// Pool address at index (indexed storage to avoid unbounded Vec)
    PoolAt(u32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Upper bound on a single page of `get_pools_paginated`
const MAX_PAGE: u32 = 50;

// ============================================================================
// SOROBAN RESOURCE LIMITS
// ============================================================================
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// The pool list uses indexed storage (PoolCount + PoolAt) instead of a Vec
// so no single ledger entry grows with the number of pools. Pagination
// reads at most MAX_PAGE entries.
// ============================================================================

#[contractimpl]
impl DecayFactory {
    /// Initialize factory with admin and pool WASM hash
    pub fn initialize(env: Env, admin: Address, pool_wasm_hash: BytesN<32>) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("Already initialized");
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::PoolWasmHash, &pool_wasm_hash);
        env.storage().instance().set(&DataKey::Fee, &0u128);
        env.storage().instance().set(&DataKey::PoolCount, &0u32);

        extend_instance_ttl(&env);
    }

    /// Deploy a pool for a token pair
    ///
    /// Tokens are sorted, so either argument order yields the same pool.
    /// Returns the pool contract address.
    pub fn create_pool(
        env: Env,
        token_a: Address,
        token_b: Address,
        name: String,
        symbol: String,
    ) -> Address {
        let (token0, token1) = sort_tokens(token_a, token_b);

        if token0 == token1 {
            panic!("Identical tokens");
        }

        let pool_key = DataKey::Pool(token0.clone(), token1.clone());
        if env.storage().persistent().has(&pool_key) {
            panic!("Pool already exists");
        }

        let admin = Self::get_admin(env.clone());
        let pool_wasm_hash = Self::get_pool_wasm_hash(env.clone());
        let pool_count = Self::get_pool_count(env.clone());

        // Deterministic salt from the pool index
        let mut salt_bytes = [0u8; 32];
        salt_bytes[0..4].copy_from_slice(&pool_count.to_be_bytes());
        let salt = BytesN::from_array(&env, &salt_bytes);

        let pool_address = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(pool_wasm_hash, ());

        init_pool(
            &env,
            &pool_address,
            &env.current_contract_address(),
            &admin,
            &token0,
            &token1,
            &name,
            &symbol,
        );

        env.storage().persistent().set(&pool_key, &pool_address);
        extend_persistent_ttl(&env, &pool_key);

        let pool_at_key = DataKey::PoolAt(pool_count);
        env.storage()
            .persistent()
            .set(&pool_at_key, &pool_address);
        extend_persistent_ttl(&env, &pool_at_key);

        env.storage()
            .instance()
            .set(&DataKey::PoolCount, &(pool_count + 1));

        log!(&env, "pool created", pool_count, pool_address);
        env.events().publish(
            (Symbol::new(&env, "pool_created"),),
            (token0, token1, pool_address.clone()),
        );

        extend_instance_ttl(&env);
        pool_address
    }

    /// Get pool address for a token pair, in either order
    pub fn get_pool(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        let (token0, token1) = sort_tokens(token_a, token_b);
        env.storage()
            .persistent()
            .get(&DataKey::Pool(token0, token1))
    }

    /// Swap fee charged by every pool of this factory
    pub fn fee(env: Env) -> u128 {
        extend_instance_ttl(&env);
        env.storage().instance().get(&DataKey::Fee).unwrap_or(0)
    }

    /// Change the swap fee (admin only, at most MAX_FEE)
    pub fn set_fee(env: Env, fee: u128) {
        let admin = Self::get_admin(env.clone());
        admin.require_auth();

        if fee > MAX_FEE {
            panic!("Fee too high");
        }

        env.storage().instance().set(&DataKey::Fee, &fee);
        env.events()
            .publish((Symbol::new(&env, "fee_updated"),), fee);
        extend_instance_ttl(&env);
    }

    /// Get total number of pools created
    pub fn get_pool_count(env: Env) -> u32 {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::PoolCount)
            .unwrap_or(0)
    }

    /// Get pool address at specific index
    pub fn get_pool_at(env: Env, index: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::PoolAt(index))
    }

    /// Get up to `limit` pools starting from `start_index`
    ///
    /// `limit` is capped at 50 to stay within Soroban's read entry limits.
    pub fn get_pools_paginated(env: Env, start_index: u32, limit: u32) -> Vec<Address> {
        let pool_count = Self::get_pool_count(env.clone());
        let end_index = start_index
            .saturating_add(limit.min(MAX_PAGE))
            .min(pool_count);

        let mut pools: Vec<Address> = Vec::new(&env);
        for i in start_index..end_index {
            if let Some(pool) = env.storage().persistent().get(&DataKey::PoolAt(i)) {
                pools.push_back(pool);
            }
        }
        pools
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Address {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("Not initialized")
    }

    /// Get pool WASM hash
    pub fn get_pool_wasm_hash(env: Env) -> BytesN<32> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::PoolWasmHash)
            .expect("Not initialized")
    }
}

fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// Pool initialization via invoke
#[allow(clippy::too_many_arguments)]
fn init_pool(
    env: &Env,
    pool_address: &Address,
    factory: &Address,
    owner: &Address,
    token0: &Address,
    token1: &Address,
    name: &String,
    symbol: &String,
) {
    env.invoke_contract::<()>(
        pool_address,
        &Symbol::new(env, "initialize"),
        (factory, owner, token0, token1, name, symbol).into_val(env),
    );
}
