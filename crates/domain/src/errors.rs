//! Errors for precondition violations.
//!
//! Degenerate market state (empty pool, zero supply, frozen pool) is never
//! an error in this crate; those cases are surfaced as sentinel values so
//! the quoting path stays branch-cheap. The variants here all indicate a
//! caller bug and should propagate.

/// A violated precondition on caller-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Aligning a decimal value to a narrower scale would truncate.
    #[error("cannot align scale {from} down to narrower scale {to}")]
    NarrowingAlignment {
        /// Scale of the value being aligned.
        from: u32,
        /// Requested target scale.
        to: u32,
    },
    /// Stable-curve amplification coefficient below the minimum of 1.
    #[error("amplification coefficient must be at least 1, got {0}")]
    AmplificationTooLow(u64),
    /// Stable-curve scale multiplier below the minimum of 1.
    #[error("scale multiplier must be at least 1")]
    ZeroScale,
    /// A fee rate above the 10000 bps denominator.
    #[error("fee of {0} bps exceeds the 10000 bps denominator")]
    FeeOutOfRange(u32),
    /// A partial-withdrawal ratio outside [0, 1].
    #[error("partial ratio must lie in [0, 1]")]
    RatioOutOfRange,
    /// Text that does not parse as a decimal literal.
    #[error("invalid decimal literal: {0:?}")]
    InvalidDecimal(String),
}
