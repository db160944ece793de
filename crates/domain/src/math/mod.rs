//! Swap-curve math.
//!
//! Pure integer arithmetic over arbitrary-precision values. Rounding and
//! iteration order here must match the settlement layer bit for bit; any
//! divergence is a financial correctness bug, so prefer fidelity over
//! algebraic simplification.

/// Constant-product (`x * y = k`) output math.
pub mod constant_product;
/// Stable-swap invariant and counterparty-reserve solvers.
pub mod stable_curve;
