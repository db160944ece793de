//! Stable-swap invariant and counterparty-reserve solvers.
//!
//! The curve is the two-coin StableSwap hybrid
//! `4A(x + y) + D = 4AD + D^3 / (4xy)`, solved by Newton iteration in
//! exact integer arithmetic. Iteration count, division order and the
//! conservative output rounding all mirror the settlement contract; the
//! client and the chain must agree even in pathological cases.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Deterministic worst-case bound in lieu of a wall-clock timeout. The
/// settlement contract caps at the same count, so a non-convergent input
/// still produces the same best-effort answer on both sides.
const MAX_ITERATIONS: usize = 256;

/// Convergence is one unit, not zero, to tolerate integer-division
/// oscillation at the fixed point.
fn converged(next: &BigUint, prev: &BigUint) -> bool {
    let diff = if next > prev {
        next - prev
    } else {
        prev - next
    };
    diff <= BigUint::one()
}

/// Computes the invariant `D` for balances already on a common scale.
///
/// Requires `amplification >= 1`. Never fails: an empty pool returns zero
/// and a non-convergent input returns the 256th iterate.
pub fn calculate_invariant(
    balance_a: &BigUint,
    balance_b: &BigUint,
    amplification: u64,
) -> BigUint {
    let sum = balance_a + balance_b;
    if sum.is_zero() {
        return BigUint::zero();
    }
    // With one side empty the product term vanishes and the constant-sum
    // limit makes the initial guess exact.
    if balance_a.is_zero() || balance_b.is_zero() {
        return sum;
    }

    let amp = BigUint::from(amplification);
    let leverage = &sum * 2u32 * &amp;
    let two_a_minus_one = &amp * 2u32 - 1u32;

    let mut d = sum;
    for _ in 0..MAX_ITERATIONS {
        // Two sequential truncating divisions; the intermediate rounding is
        // part of the settlement fixed point and must not be fused into one
        // combined division.
        let mut d_prod = &d * &d / (balance_a * 2u32);
        d_prod = d_prod * &d / (balance_b * 2u32);

        let d_next =
            &d * (&d_prod * 2u32 + &leverage) / (&d * &two_a_minus_one + &d_prod * 3u32);
        let done = converged(&d_next, &d);
        d = d_next;
        if done {
            break;
        }
    }
    d
}

/// Output amount preserving the pre-trade invariant when `delta_in` is
/// added to `reserve_in`.
///
/// Solves for the counterparty reserve `y` under the invariant of the
/// pre-trade reserves, then returns `reserve_out - y - 1`: the final unit
/// is deliberately kept by the pool so a trader can never extract a
/// fractional unit through rounding. Degenerate inputs (a solved `y` at or
/// above `reserve_out`) quote zero instead of going negative.
pub fn calculate_out_amount(
    delta_in: &BigUint,
    reserve_in: &BigUint,
    reserve_out: &BigUint,
    amplification: u64,
) -> BigUint {
    let new_in = reserve_in + delta_in;
    if new_in.is_zero() {
        return BigUint::zero();
    }
    let d = calculate_invariant(reserve_in, reserve_out, amplification);
    if d.is_zero() {
        return BigUint::zero();
    }

    let amp = BigUint::from(amplification);
    // Sequential divisions again, in exactly this order.
    let mut c = &d * &d / (&new_in * 2u32);
    c = c * &d / (&amp * 4u32);
    let b = &d / (&amp * 2u32) + &new_in;

    let mut y = d.clone();
    for _ in 0..MAX_ITERATIONS {
        let two_y_plus_b = &y * 2u32 + &b;
        if two_y_plus_b <= d {
            // Denominator of the update would be non-positive; keep the
            // last iterate as the best-effort answer.
            break;
        }
        let y_next = (&y * &y + &c) / (two_y_plus_b - &d);
        let done = converged(&y_next, &y);
        y = y_next;
        if done {
            break;
        }
    }

    if *reserve_out > y {
        reserve_out - y - 1u32
    } else {
        BigUint::zero()
    }
}

/// `10^exp`.
fn scale_factor(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// Invariant for raw amounts with per-side decimal precisions.
///
/// Both sides are normalized up to the larger precision before solving;
/// the returned `D` is expressed at that common precision.
pub fn calculate_invariant_scaled(
    balance_a: &BigUint,
    balance_b: &BigUint,
    amplification: u64,
    decimals_a: u8,
    decimals_b: u8,
) -> BigUint {
    let max_decimals = decimals_a.max(decimals_b);
    let a = balance_a * scale_factor((max_decimals - decimals_a) as u32);
    let b = balance_b * scale_factor((max_decimals - decimals_b) as u32);
    calculate_invariant(&a, &b, amplification)
}

/// Output amount for raw amounts with per-side decimal precisions.
///
/// Normalizes both sides (and the input delta) up to the larger precision,
/// solves, then truncates the result back down by the output side's scale
/// factor.
pub fn calculate_out_amount_scaled(
    delta_in: &BigUint,
    reserve_in: &BigUint,
    reserve_out: &BigUint,
    amplification: u64,
    decimals_in: u8,
    decimals_out: u8,
) -> BigUint {
    let max_decimals = decimals_in.max(decimals_out);
    let factor_in = scale_factor((max_decimals - decimals_in) as u32);
    let factor_out = scale_factor((max_decimals - decimals_out) as u32);

    let out = calculate_out_amount(
        &(delta_in * &factor_in),
        &(reserve_in * &factor_in),
        &(reserve_out * &factor_out),
        amplification,
    );
    out / factor_out
}
