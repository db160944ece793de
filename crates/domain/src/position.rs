use crate::decimal::DecimalValue;
use crate::errors::DomainError;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A share of a pool: a liquidity-share balance, optionally narrowed to a
/// partial-withdrawal ratio.
///
/// Positions are immutable; narrowing produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Liquidity-share balance backing the position.
    pub lsp_balance: BigUint,
    /// Optional ratio in [0, 1] selecting a fraction of the balance.
    pub ratio: Option<DecimalValue>,
}

impl Position {
    /// Builds a full position from a coin balance.
    pub fn new(lsp_balance: impl Into<BigUint>) -> Self {
        Self {
            lsp_balance: lsp_balance.into(),
            ratio: None,
        }
    }

    /// Returns a new position narrowed to `ratio` of the balance.
    ///
    /// The ratio must lie in [0, 1]; anything else is a caller bug.
    pub fn with_partial_ratio(&self, ratio: DecimalValue) -> Result<Self, DomainError> {
        if !ratio.is_proper_fraction() {
            return Err(DomainError::RatioOutOfRange);
        }
        Ok(Self {
            lsp_balance: self.lsp_balance.clone(),
            ratio: Some(ratio),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ratio_is_immutable() {
        let full = Position::new(1000u32);
        let partial = full
            .with_partial_ratio(DecimalValue::parse("0.25").unwrap())
            .unwrap();

        assert_eq!(full.ratio, None);
        assert_eq!(partial.ratio, Some(DecimalValue::new(25, 2)));
        assert_eq!(partial.lsp_balance, full.lsp_balance);
    }

    #[test]
    fn test_ratio_must_be_proper() {
        let full = Position::new(1000u32);
        assert_eq!(
            full.with_partial_ratio(DecimalValue::parse("1.5").unwrap()),
            Err(DomainError::RatioOutOfRange)
        );
        assert_eq!(
            full.with_partial_ratio(DecimalValue::new(-1, 2)),
            Err(DomainError::RatioOutOfRange)
        );
        // The boundaries are allowed.
        assert!(full.with_partial_ratio(DecimalValue::parse("0").unwrap()).is_ok());
        assert!(full.with_partial_ratio(DecimalValue::parse("1.0").unwrap()).is_ok());
    }
}
