use decay_types::{PoolConfig, PoolError, Side, VirtualBalance};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// Instance storage (read on every call, small and bounded):
// - Config, TotalSupply, Locked
// - VirtualBalance(side, index): exactly four entries, two sides x two assets
//
// Persistent storage (one entry per holder):
// - Shares(address), removed when the balance drops to zero
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Total share supply (Instance storage)
    TotalSupply,
    /// Reentrancy lock (Instance storage)
    Locked,
    /// Virtual balance: (side, asset index) -> VirtualBalance (Instance storage)
    VirtualBalance(Side, u32),
    /// Share balance: holder -> u128 (Persistent storage)
    Shares(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PoolConfig, PoolError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Supply ===

pub fn get_total_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: u128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

// === Lock ===

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    env.storage().instance().set(&DataKey::Locked, &locked);
}

// === Virtual balances ===

pub fn get_virtual_balance(env: &Env, side: Side, index: u32) -> VirtualBalance {
    env.storage()
        .instance()
        .get(&DataKey::VirtualBalance(side, index))
        .unwrap_or_default()
}

pub fn set_virtual_balance(env: &Env, side: Side, index: u32, vb: &VirtualBalance) {
    env.storage()
        .instance()
        .set(&DataKey::VirtualBalance(side, index), vb);
}

// === Shares ===

pub fn get_shares(env: &Env, holder: &Address) -> u128 {
    let key = DataKey::Shares(holder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_shares(env: &Env, holder: &Address, amount: u128) {
    let key = DataKey::Shares(holder.clone());
    if amount == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}
