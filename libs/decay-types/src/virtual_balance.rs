use soroban_sdk::contracttype;

/// Direction a virtual balance prices
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    /// Asset flowing into the pool (swap input, deposit)
    Addition,
    /// Asset flowing out of the pool (swap output, withdrawal)
    Removal,
}

/// Smoothed balance of one asset for one side
///
/// Missing storage entries read as the default `{0, 0}`, which decays to the
/// real balance immediately for any ledger time past `DECAY_PERIOD`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VirtualBalance {
    /// Balance at `time`
    pub balance: u128,
    /// Ledger timestamp of the last write
    pub time: u64,
}

impl VirtualBalance {
    pub fn new(balance: u128, time: u64) -> Self {
        Self { balance, time }
    }
}
