//! Shared fixtures for the pool's unit tests

use crate::liquidity::{deposit, withdraw};
use crate::storage::set_config;
use crate::swap::execute_swap;
use crate::vault::AssetVault;
use crate::DecayPool;
use core::cell::{Cell, RefCell};
use decay_types::{PoolConfig, PoolError};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{
    contract, contractimpl, symbol_short, token, vec, Address, Env, String, Vec,
};

/// Ledger time used by the fixtures, far past the first decay window
pub const NOW: u64 = 1_700_000_000;

/// Register a configured pool whose assets live in a `MemoryVault`
pub fn setup_ledger(env: &Env, balance0: u128, balance1: u128) -> (Address, PoolConfig, MemoryVault) {
    env.ledger().set_timestamp(NOW);

    let pool = env.register(DecayPool, ());
    let config = PoolConfig {
        factory: Address::generate(env),
        owner: Address::generate(env),
        token0: Address::generate(env),
        token1: Address::generate(env),
        name: String::from_str(env, "Decay WETH-DAI"),
        symbol: String::from_str(env, "DLP-WETH-DAI"),
    };
    env.as_contract(&pool, || set_config(env, &config));

    let vault = MemoryVault::new(
        config.token0.clone(),
        config.token1.clone(),
        [balance0, balance1],
    );
    (pool, config, vault)
}

/// Deploy a Stellar asset contract, returning its user and admin clients
pub fn create_token<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let address = env.register_stellar_asset_contract_v2(admin.clone()).address();
    (
        token::Client::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

/// In-memory vault holding the pool's two balances
///
/// Pulls optionally lose a fraction of the amount in transit, like a token
/// charging a fee on transfer.
pub struct MemoryVault {
    token0: Address,
    token1: Address,
    balances: RefCell<[u128; 2]>,
    transfer_fee_bps: Cell<u128>,
}

impl MemoryVault {
    pub fn new(token0: Address, token1: Address, balances: [u128; 2]) -> Self {
        Self {
            token0,
            token1,
            balances: RefCell::new(balances),
            transfer_fee_bps: Cell::new(0),
        }
    }

    pub fn balances(&self) -> [u128; 2] {
        *self.balances.borrow()
    }

    /// Tokens sent to the pool from outside any pool operation
    pub fn airdrop(&self, index: usize, amount: u128) {
        self.balances.borrow_mut()[index] += amount;
    }

    pub fn set_transfer_fee_bps(&self, bps: u128) {
        self.transfer_fee_bps.set(bps);
    }

    fn index(&self, asset: &Address) -> usize {
        if *asset == self.token0 {
            0
        } else if *asset == self.token1 {
            1
        } else {
            panic!("unknown asset")
        }
    }
}

impl AssetVault for MemoryVault {
    fn balance_of(&self, _env: &Env, asset: &Address) -> u128 {
        self.balances.borrow()[self.index(asset)]
    }

    fn pull(&self, _env: &Env, asset: &Address, _from: &Address, amount: u128) -> Result<u128, PoolError> {
        let received = amount - amount * self.transfer_fee_bps.get() / 10_000;
        self.balances.borrow_mut()[self.index(asset)] += received;
        Ok(received)
    }

    fn push(&self, _env: &Env, asset: &Address, _to: &Address, amount: u128) -> Result<(), PoolError> {
        let index = self.index(asset);
        let mut balances = self.balances.borrow_mut();
        if balances[index] < amount {
            panic!("insufficient vault balance");
        }
        balances[index] -= amount;
        Ok(())
    }
}

/// Operation a `ReentrantVault` attempts from inside a transfer
#[derive(Clone, Copy)]
pub enum Reentry {
    Swap,
    Deposit,
    Withdraw,
}

/// Vault whose first transfer calls back into the pool, like a malicious token hook
pub struct ReentrantVault {
    inner: MemoryVault,
    reentry: Reentry,
    nested: RefCell<Option<Result<(), PoolError>>>,
}

impl ReentrantVault {
    pub fn new(inner: MemoryVault, reentry: Reentry) -> Self {
        Self {
            inner,
            reentry,
            nested: RefCell::new(None),
        }
    }

    /// Outcome of the nested call, once attempted
    pub fn nested_result(&self) -> Option<Result<(), PoolError>> {
        *self.nested.borrow()
    }

    pub fn inner(&self) -> &MemoryVault {
        &self.inner
    }

    pub fn into_inner(self) -> MemoryVault {
        self.inner
    }

    fn reenter(&self, env: &Env, user: &Address) {
        if self.nested.borrow().is_some() {
            return;
        }
        let outcome = match self.reentry {
            Reentry::Swap => execute_swap(
                env,
                &self.inner,
                user,
                &self.inner.token0,
                &self.inner.token1,
                1,
                0,
                None,
                0,
            )
            .map(|_| ()),
            Reentry::Deposit => {
                let amounts = vec![env, 1u128, 1u128];
                deposit(env, &self.inner, user, &amounts, &Vec::new(env)).map(|_| ())
            }
            Reentry::Withdraw => withdraw(env, &self.inner, user, 1, &Vec::new(env)).map(|_| ()),
        };
        self.nested.replace(Some(outcome));
    }
}

impl AssetVault for ReentrantVault {
    fn balance_of(&self, env: &Env, asset: &Address) -> u128 {
        self.inner.balance_of(env, asset)
    }

    fn pull(&self, env: &Env, asset: &Address, from: &Address, amount: u128) -> Result<u128, PoolError> {
        self.reenter(env, from);
        self.inner.pull(env, asset, from, amount)
    }

    fn push(&self, env: &Env, asset: &Address, to: &Address, amount: u128) -> Result<(), PoolError> {
        self.reenter(env, to);
        self.inner.push(env, asset, to, amount)
    }
}

/// Stand-in for the factory's fee getter
#[contract]
pub struct MockFeeSource;

#[contractimpl]
impl MockFeeSource {
    pub fn set_fee(env: Env, fee: u128) {
        env.storage().instance().set(&symbol_short!("fee"), &fee);
    }

    pub fn fee(env: Env) -> u128 {
        env.storage()
            .instance()
            .get(&symbol_short!("fee"))
            .unwrap_or(0)
    }
}
