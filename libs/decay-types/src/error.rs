use soroban_sdk::contracterror;

/// Errors returned by pool entry points.
///
/// Every error aborts the whole invocation, so no partial state survives.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// `initialize` called on a configured pool
    AlreadyInitialized = 1,
    /// Operation on a pool that was never initialized
    NotInitialized = 2,
    /// Wrong vector length, zero amount, unknown or identical assets, empty name
    InvalidInput = 3,
    /// Result below the caller supplied minimum
    SlippageExceeded = 4,
    /// Computed output or minted shares is zero
    InsufficientResult = 5,
    /// Mutating call while another one is in progress
    Reentrancy = 6,
    /// Rescue would take registered pool assets
    AccessDenied = 7,
    /// Burn or transfer of more shares than the account holds
    InsufficientShares = 8,
    /// Amount does not fit the token interface
    Overflow = 9,
}
