//! Liquidity-share accounting for positions.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};
use pricer_domain::{Pool, Position};

/// Effective share balance of a position.
///
/// A full position is its balance; a partial position is
/// `floor(balance * ratio)`, clamped into `[0, balance]`.
pub fn position_balance(position: &Position) -> BigUint {
    let Some(ratio) = &position.ratio else {
        return position.lsp_balance.clone();
    };
    let scaled = BigInt::from(position.lsp_balance.clone()) * &ratio.mantissa;
    let value = scaled / BigInt::from(10u32).pow(ratio.scale);
    if value.is_negative() {
        return BigUint::zero();
    }
    let value = value.to_biguint().unwrap_or_default();
    value.min(position.lsp_balance.clone())
}

/// Fraction of the pool the position represents, for display only.
pub fn share_of_pool(pool: &Pool, position: &Position) -> f64 {
    if pool.lsp_supply.is_zero() {
        return 0.0;
    }
    let balance = position_balance(position);
    balance.to_f64().unwrap_or(f64::NAN) / pool.lsp_supply.to_f64().unwrap_or(f64::NAN)
}

/// Proportional share of the pool reserves, truncating.
///
/// Zero supply means no claim, so both sides come back zero.
pub fn share_coin_amounts(pool: &Pool, position: &Position) -> (BigUint, BigUint) {
    if pool.lsp_supply.is_zero() {
        return (BigUint::zero(), BigUint::zero());
    }
    let balance = position_balance(position);
    let x = &pool.reserve_x * &balance / &pool.lsp_supply;
    let y = &pool.reserve_y * &balance / &pool.lsp_supply;
    (x, y)
}
