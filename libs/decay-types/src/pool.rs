use soroban_sdk::{contracttype, Address, String};

/// Pool configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Factory contract address, also the fee source
    pub factory: Address,
    /// Address allowed to rescue stray tokens
    pub owner: Address,
    /// First asset (lower address when deployed by the factory)
    pub token0: Address,
    /// Second asset
    pub token1: Address,
    /// Share token name
    pub name: String,
    /// Share token symbol
    pub symbol: String,
}

impl PoolConfig {
    /// Storage index of `asset`, or `None` if the pool does not hold it
    pub fn index_of(&self, asset: &Address) -> Option<u32> {
        if *asset == self.token0 {
            Some(0)
        } else if *asset == self.token1 {
            Some(1)
        } else {
            None
        }
    }

    pub fn is_token(&self, asset: &Address) -> bool {
        self.index_of(asset).is_some()
    }

    /// Asset stored at `index` (0 or 1)
    pub fn token(&self, index: u32) -> &Address {
        if index == 0 {
            &self.token0
        } else {
            &self.token1
        }
    }
}

// ============================================================================
// SWAP COMPUTATION TYPES
// These types separate pure computation from side effects
// ============================================================================

/// Real and pricing balances of a swap pair, taken before the input transfer
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SwapBalances {
    /// Real balance of the input asset
    pub real_src: u128,
    /// Real balance of the output asset
    pub real_dst: u128,
    /// Addition-side balance of the input asset, floored at `real_src`
    pub src_addition: u128,
    /// Removal-side balance of the output asset, capped at `real_dst`
    pub dst_removal: u128,
}

impl SwapBalances {
    /// True if the input asset's addition balance had not converged yet
    pub fn src_imbalanced(&self) -> bool {
        self.src_addition != self.real_src
    }

    /// True if the output asset's removal balance had not converged yet
    pub fn dst_imbalanced(&self) -> bool {
        self.dst_removal != self.real_dst
    }
}
