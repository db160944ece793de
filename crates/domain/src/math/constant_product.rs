use num_bigint::BigUint;
use num_traits::Zero;

/// Calculates the output amount for a constant product pool (x * y = k).
///
/// formula: dy = y * dx / (x + dx), truncating.
///
/// Fees are the accounting layer's concern; the amount passed in here is
/// already net of them. Empty inputs or reserves quote zero rather than
/// erroring, so degenerate pools compose through the caller unchanged.
pub fn calculate_out_amount(
    amount_in: &BigUint,
    reserve_in: &BigUint,
    reserve_out: &BigUint,
) -> BigUint {
    if amount_in.is_zero() {
        return BigUint::zero();
    }
    let denominator = reserve_in + amount_in;
    if denominator.is_zero() {
        return BigUint::zero();
    }
    reserve_out * amount_in / denominator
}
