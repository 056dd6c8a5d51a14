#![no_std]

mod error;
mod pool;
mod virtual_balance;

pub use error::*;
pub use pool::*;
pub use virtual_balance::*;

/// Fixed-point unit (1e18) used for fees and the referral invariant ratio
pub const ONE: u128 = 1_000_000_000_000_000_000;

/// ONE squared, the scale of the invariant growth ratio
pub const ONE_SQUARED: u128 = ONE * ONE;

/// Seconds for a virtual balance to fully converge to the real balance
pub const DECAY_PERIOD: u64 = 300;

/// Denominator of the swap fee, a fee of `FEE_DENOMINATOR` would be 100%
pub const FEE_DENOMINATOR: u128 = ONE;

/// Upper bound for the factory fee: 0.3%
pub const MAX_FEE: u128 = FEE_DENOMINATOR * 3 / 1000;

/// Shares minted to the pool itself on the first deposit and locked forever
pub const BASE_SUPPLY: u128 = 1000;

/// Referrals receive 1/REFERRAL_SHARE of the invariant growth of a swap
pub const REFERRAL_SHARE: u128 = 20;

/// Number of assets held by every pool
pub const POOL_ASSETS: u32 = 2;
