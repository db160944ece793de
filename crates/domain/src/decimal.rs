//! Exact fixed-point decimal values.
//!
//! A [`DecimalValue`] is `mantissa / 10^scale` with an arbitrary-precision
//! mantissa. Values of different scale are only combinable after aligning
//! to a common scale, and alignment only ever widens; narrowing would
//! silently truncate and is refused.

use crate::errors::DomainError;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An exact decimal: `mantissa / 10^scale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalValue {
    /// Signed arbitrary-precision mantissa.
    pub mantissa: BigInt,
    /// Number of decimal places.
    pub scale: u32,
}

/// `10^exp` as a [`BigInt`].
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

impl DecimalValue {
    /// Creates a decimal from a mantissa and scale.
    pub fn new(mantissa: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            mantissa: mantissa.into(),
            scale,
        }
    }

    /// The zero value at scale 0.
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Parses a plain decimal literal.
    ///
    /// Accepts `digits` or `digits.digits` (the fractional digits may be
    /// empty). Redundant leading zeros are rejected; a single `0` integer
    /// part is fine. Signs, exponents and anything else return `None` —
    /// malformed numeric text is routine user input, not an exception.
    pub fn parse(text: &str) -> Option<Self> {
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (text, ""),
        };
        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if int_part.len() > 1 && int_part.starts_with('0') {
            return None;
        }
        let digits = [int_part, frac_part].concat();
        let mantissa = BigInt::parse_bytes(digits.as_bytes(), 10)?;
        Some(Self {
            mantissa,
            scale: frac_part.len() as u32,
        })
    }

    /// Renders the value with a decimal point `scale` digits from the right.
    ///
    /// With `pad_to_scale` the fractional part keeps exactly `scale` digits;
    /// otherwise trailing fractional zeros (and an empty fraction's dot) are
    /// dropped.
    pub fn format(&self, pad_to_scale: bool) -> String {
        let mut digits = self.mantissa.magnitude().to_string();
        let scale = self.scale as usize;
        if digits.len() <= scale {
            digits = format!("{}{}", "0".repeat(scale - digits.len() + 1), digits);
        }
        let split = digits.len() - scale;
        let int_part = &digits[..split];
        let mut frac_part = digits[split..].to_string();
        if !pad_to_scale {
            while frac_part.ends_with('0') {
                frac_part.pop();
            }
        }
        let sign = if self.mantissa.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };
        if frac_part.is_empty() {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac_part}")
        }
    }

    /// Floating approximation, for display only.
    pub fn to_f64(&self) -> f64 {
        self.mantissa.to_f64().unwrap_or(f64::NAN) / 10f64.powi(self.scale as i32)
    }

    /// Whether the value can be aligned to `target_scale` without loss.
    pub fn can_align_to(&self, target_scale: u32) -> bool {
        self.scale <= target_scale
    }

    /// Re-expresses the value at a wider scale.
    ///
    /// Fails on a narrowing target; that is a caller bug, never market
    /// state, so it is loud rather than clamped.
    pub fn align_to(&self, target_scale: u32) -> Result<Self, DomainError> {
        if !self.can_align_to(target_scale) {
            return Err(DomainError::NarrowingAlignment {
                from: self.scale,
                to: target_scale,
            });
        }
        Ok(Self {
            mantissa: &self.mantissa * pow10(target_scale - self.scale),
            scale: target_scale,
        })
    }

    /// Whether the value lies in the closed interval [0, 1].
    pub fn is_proper_fraction(&self) -> bool {
        !self.mantissa.is_negative() && self.mantissa <= pow10(self.scale)
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

impl FromStr for DecimalValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidDecimal(s.to_string()))
    }
}

impl DecimalValue {
    /// True when the mantissa is zero at any scale.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }
}
