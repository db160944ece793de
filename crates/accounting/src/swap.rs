//! Swap quoting.
//!
//! Fee ordering matches settlement: when the admin fee is charged on the
//! input leg it is deducted before the curve, otherwise after; the LP fee
//! always comes off the input before the curve sees it.

use num_bigint::BigUint;
use num_traits::{CheckedSub, ToPrimitive};
use pricer_domain::math::{constant_product, stable_curve};
use pricer_domain::{CurveType, FeeDirection, Pool};
use rust_decimal::Decimal;
use tracing::debug;

/// Fixed-point denominator for slippage tolerance: nine decimal places.
const SLIPPAGE_DENOM: u64 = 1_000_000_000;

/// Deducts a basis-point fee, truncating, clamping at zero.
pub(crate) fn deduct_fee(amount: &BigUint, bps: u32) -> BigUint {
    let fee = amount * bps / 10_000u32;
    amount.checked_sub(&fee).unwrap_or_default()
}

/// Quotes an X-for-Y swap of `amount_in` against the snapshot.
///
/// Returns zero on empty or degenerate pools; callers gate on
/// [`Pool::swap_status`] before trusting a quote.
pub fn quote_forward_swap(pool: &Pool, amount_in: &BigUint) -> BigUint {
    quote_swap(pool, amount_in, true)
}

/// Quotes a Y-for-X swap of `amount_in` against the snapshot.
pub fn quote_reverse_swap(pool: &Pool, amount_in: &BigUint) -> BigUint {
    quote_swap(pool, amount_in, false)
}

fn quote_swap(pool: &Pool, amount_in: &BigUint, x_is_input: bool) -> BigUint {
    let admin_on_input = matches!(
        (pool.fee_direction, x_is_input),
        (FeeDirection::ChargeOnX, true) | (FeeDirection::ChargeOnY, false)
    );

    let mut amount = amount_in.clone();
    if admin_on_input {
        amount = deduct_fee(&amount, pool.total_admin_fee_bps());
    }
    amount = deduct_fee(&amount, pool.total_lp_fee_bps());

    let (reserve_in, reserve_out) = if x_is_input {
        (&pool.reserve_x, &pool.reserve_y)
    } else {
        (&pool.reserve_y, &pool.reserve_x)
    };

    let mut out = match pool.curve {
        CurveType::ConstantProduct => {
            constant_product::calculate_out_amount(&amount, reserve_in, reserve_out)
        }
        CurveType::StableSwap {
            amplification,
            scale_x,
            scale_y,
        } => {
            let (scale_in, scale_out) = if x_is_input {
                (scale_x, scale_y)
            } else {
                (scale_y, scale_x)
            };
            let scaled = stable_curve::calculate_out_amount(
                &(&amount * scale_in),
                &(reserve_in * scale_in),
                &(reserve_out * scale_out),
                amplification,
            );
            scaled / scale_out
        }
    };

    if !admin_on_input {
        out = deduct_fee(&out, pool.total_admin_fee_bps());
    }

    debug!(%amount_in, %out, x_is_input, "quoted swap");
    out
}

/// Applies a slippage tolerance to an already-computed quote.
///
/// The tolerance is applied at nine decimal places, rounding down:
/// `quote * floor((1 - slippage) * 1e9) / 1e9`. `slippage` is a fraction
/// in [0, 1]; a tolerance at or above 1 floors the output to zero.
pub fn apply_slippage(quote: &BigUint, slippage: Decimal) -> BigUint {
    let factor = ((Decimal::ONE - slippage) * Decimal::from(SLIPPAGE_DENOM))
        .floor()
        .to_u64()
        .unwrap_or(0);
    quote * factor / SLIPPAGE_DENOM
}

/// Minimum acceptable output for an X-for-Y swap under `slippage`.
pub fn quote_min_output(pool: &Pool, amount_in: &BigUint, slippage: Decimal) -> BigUint {
    apply_slippage(&quote_forward_swap(pool, amount_in), slippage)
}
