use decay_types::{PoolConfig, MAX_FEE};
use soroban_sdk::{contractclient, Env};

/// Interface of the contract supplying the swap fee (the factory)
#[allow(dead_code)]
#[contractclient(name = "FeeSourceClient")]
pub trait FeeSource {
    /// Fee in units of FEE_DENOMINATOR
    fn fee(env: Env) -> u128;
}

/// Fee for the next swap, capped at MAX_FEE
pub fn current_fee(env: &Env, config: &PoolConfig) -> u128 {
    FeeSourceClient::new(env, &config.factory).fee().min(MAX_FEE)
}
