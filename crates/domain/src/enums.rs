use serde::{Deserialize, Serialize};

/// The pricing curve a pool settles against.
///
/// Stable-swap parameters travel with the variant so every operation
/// dispatches on the curve exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveType {
    /// Constant product, `x * y = k`.
    ConstantProduct,
    /// Constant-sum/constant-product hybrid solved by Newton iteration.
    StableSwap {
        /// Amplification coefficient `A`, at least 1.
        amplification: u64,
        /// Normalization multiplier applied to the X reserve before curve
        /// math, at least 1.
        scale_x: u64,
        /// Normalization multiplier applied to the Y reserve, at least 1.
        scale_y: u64,
    },
}

/// Which leg of a swap the admin fee is deducted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeDirection {
    /// Admin fee comes out of the X leg.
    ChargeOnX,
    /// Admin fee comes out of the Y leg.
    ChargeOnY,
}

/// Swap-availability gate, checked by callers before trusting a quote.
///
/// Quoting on a frozen or empty pool is not an error; it just returns
/// degenerate amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolStatus {
    /// Swaps and deposits are possible.
    Available,
    /// The pool is administratively frozen.
    Frozen,
    /// One or both reserves are empty.
    EmptyReserves,
}
