// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal rules for the decaying virtual balance pool.
//
// STRUCTURE:
//
// - math_specs.rs        : Virtual balance decay and return formula
// - swap_specs.rs        : Swap pricing and product growth
// - liquidity_specs.rs   : Share minting, burning and pro-rata payouts
// - pool_state_specs.rs  : Initialization, fee bounds and the reentrancy lock
//
// USAGE:
// - Unit tests: cargo test -p decay-pool
// - Certora build: cargo build --features certora -p decay-pool
// - Verification: certoraSorobanProver decay_pool.conf
//
// ============================================================================

pub mod liquidity_specs;
pub mod math_specs;
pub mod pool_state_specs;
pub mod swap_specs;
