//! Mid, buy and sell prices.
//!
//! The mid price is Y per X, normalized for token decimals. Prices are
//! floats for display and strategy code; they never feed settlement-path
//! arithmetic.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use pricer_domain::math::stable_curve;
use pricer_domain::{CurveType, Pool};

fn ratio_to_f64(numerator: &BigUint, denominator: &BigUint) -> f64 {
    let den = denominator.to_f64().unwrap_or(f64::NAN);
    if den == 0.0 {
        return 0.0;
    }
    let value = numerator.to_f64().unwrap_or(f64::NAN) / den;
    if value.is_finite() { value } else { 0.0 }
}

/// Mid price of X in Y units, adjusted for token decimals.
///
/// Constant product is the plain reserve ratio. For stable pools the price
/// is the invariant's local slope at the current reserves, taken as an
/// exact rational in `D`, the scaled reserves and `A`, then converted to a
/// float; no perturbation re-solve. A drained pool prices at zero.
pub fn price(pool: &Pool, decimals_x: u8, decimals_y: u8) -> f64 {
    let decimal_shift = 10f64.powi(decimals_x as i32 - decimals_y as i32);
    match pool.curve {
        CurveType::ConstantProduct => {
            if pool.reserve_x.is_zero() {
                return 0.0;
            }
            let ratio = pool.reserve_y.to_f64().unwrap_or(f64::NAN)
                / pool.reserve_x.to_f64().unwrap_or(f64::NAN);
            ratio * decimal_shift
        }
        CurveType::StableSwap {
            amplification,
            scale_x,
            scale_y,
        } => {
            let xs = &pool.reserve_x * scale_x;
            let ys = &pool.reserve_y * scale_y;
            if xs.is_zero() || ys.is_zero() {
                return 0.0;
            }
            let d = stable_curve::calculate_invariant(&xs, &ys, amplification);
            let d_cubed = &d * &d * &d;

            // Slope of the implicit curve 4A(x+y) + D = 4AD + D^3/(4xy) at
            // the current reserves, in scaled units:
            //   |dy/dx| = (16A x^2 y^2 + D^3 y) / (16A x^2 y^2 + D^3 x)
            // Both terms are positive, so the ratio is exact in unsigned
            // integers.
            let common = BigUint::from(amplification) * 16u32 * &xs * &xs * &ys * &ys;
            let numerator = &common + &d_cubed * &ys;
            let denominator = &common + &d_cubed * &xs;

            let slope = ratio_to_f64(&numerator, &denominator);
            slope * (scale_x as f64 / scale_y as f64) * decimal_shift
        }
    }
}

/// Net multiplier left after both fee layers.
fn net_fee_factor(pool: &Pool) -> f64 {
    let net_admin = 1.0 - pool.total_admin_fee_bps() as f64 / 10_000.0;
    let net_lp = 1.0 - pool.total_lp_fee_bps() as f64 / 10_000.0;
    net_admin * net_lp
}

/// Effective price paid when buying X: the mid price grossed up by fees.
pub fn buy_price(pool: &Pool, decimals_x: u8, decimals_y: u8) -> f64 {
    let factor = net_fee_factor(pool);
    if factor == 0.0 {
        return 0.0;
    }
    price(pool, decimals_x, decimals_y) / factor
}

/// Effective price received when selling X: the mid price net of fees.
pub fn sell_price(pool: &Pool, decimals_x: u8, decimals_y: u8) -> f64 {
    price(pool, decimals_x, decimals_y) * net_fee_factor(pool)
}
