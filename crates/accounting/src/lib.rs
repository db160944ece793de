//! Pool-level accounting built on `pricer-domain`.
//!
//! This crate turns a pool snapshot, its fee parameters and the curve
//! solvers into concrete numbers:
//! - Swap quotes with fee-direction-aware deduction and slippage floors
//! - Deposit and withdrawal sizing
//! - Liquidity-share accounting for positions
//! - Mid/buy/sell prices
//! - APR, TVL and volume estimates
//!
//! All functions are pure over immutable snapshots; degenerate market
//! state comes back as `0` or `None`, never as an error.

/// Prelude module for convenient imports.
pub mod prelude;

/// Deposit and withdrawal sizing.
pub mod deposit;
/// APR, TVL and volume estimation.
pub mod metrics;
/// Mid, buy and sell prices.
pub mod price;
/// Liquidity-share accounting.
pub mod shares;
/// Swap quoting.
pub mod swap;
