//! Value types and exact-integer math for AMM pool pricing.
//!
//! Everything in this crate is a pure function over immutable value types.
//! Pool and position snapshots are constructed from externally-fetched state
//! and never mutated; all arithmetic on the settlement path uses
//! arbitrary-precision integers so results are bit-reproducible across
//! platforms.

/// Exact fixed-point decimal values.
pub mod decimal;
/// Curve, fee-direction and pool-status enums.
pub mod enums;
/// Precondition-violation errors.
pub mod errors;
/// Swap-curve math (constant product and stable swap).
pub mod math;
/// Pool snapshot.
pub mod pool;
/// Liquidity-share position.
pub mod position;

pub use decimal::DecimalValue;
pub use enums::{CurveType, FeeDirection, PoolStatus};
pub use errors::DomainError;
pub use pool::{Pool, TradeStats};
pub use position::Position;
