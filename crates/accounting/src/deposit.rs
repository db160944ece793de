//! Deposit and withdrawal sizing.

use crate::shares;
use crate::swap::deduct_fee;
use num_bigint::BigUint;
use num_traits::Zero;
use pricer_domain::{Pool, Position};
use tracing::debug;

/// Largest deposit `(x, y)` with `x <= max_x`, `y <= max_y` preserving the
/// current reserve ratio exactly, truncating.
///
/// An uninitialized pool or a zero budget on either side returns `(0, 0)`;
/// first deposits are priced by the settlement layer, not quoted here.
pub fn quote_deposit(pool: &Pool, max_x: &BigUint, max_y: &BigUint) -> (BigUint, BigUint) {
    if !pool.is_initialized()
        || max_x.is_zero()
        || max_y.is_zero()
        || pool.reserve_x.is_zero()
        || pool.reserve_y.is_zero()
    {
        return (BigUint::zero(), BigUint::zero());
    }

    let y_for_x = &pool.reserve_y * max_x / &pool.reserve_x;
    let (x, y) = if y_for_x <= *max_y {
        (max_x.clone(), y_for_x)
    } else {
        (&pool.reserve_x * max_y / &pool.reserve_y, max_y.clone())
    };
    debug!(%x, %y, "sized deposit");
    (x, y)
}

/// Coin amounts released by withdrawing the position, net of the pool's
/// withdrawal fee on each side.
pub fn quote_withdraw(pool: &Pool, position: &Position) -> (BigUint, BigUint) {
    let (x, y) = shares::share_coin_amounts(pool, position);
    (
        deduct_fee(&x, pool.withdraw_fee_bps),
        deduct_fee(&y, pool.withdraw_fee_bps),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_domain::{CurveType, DecimalValue, FeeDirection, TradeStats};

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn pool() -> Pool {
        Pool {
            reserve_x: n(1_000_000),
            reserve_y: n(2_000_000),
            lsp_supply: n(10_000),
            curve: CurveType::ConstantProduct,
            fee_direction: FeeDirection::ChargeOnX,
            admin_fee_bps: 0,
            lp_fee_bps: 0,
            incentive_fee_bps: 0,
            connect_fee_bps: 0,
            withdraw_fee_bps: 0,
            frozen: false,
            stats: TradeStats::default(),
        }
    }

    #[test]
    fn test_deposit_binding_on_y() {
        // Ratio is 1:2; offering 1000 X needs 2000 Y but only 1500 is
        // available, so Y binds: x = 1_000_000 * 1500 / 2_000_000 = 750.
        let (x, y) = quote_deposit(&pool(), &n(1000), &n(1500));
        assert_eq!((x, y), (n(750), n(1500)));
    }

    #[test]
    fn test_deposit_binding_on_x() {
        let (x, y) = quote_deposit(&pool(), &n(1000), &n(5000));
        assert_eq!((x, y), (n(1000), n(2000)));
    }

    #[test]
    fn test_deposit_uninitialized_pool() {
        let mut uninitialized = pool();
        uninitialized.lsp_supply = n(0);
        assert_eq!(
            quote_deposit(&uninitialized, &n(1000), &n(1000)),
            (n(0), n(0))
        );
    }

    #[test]
    fn test_deposit_zero_budget() {
        assert_eq!(quote_deposit(&pool(), &n(0), &n(1000)), (n(0), n(0)));
        assert_eq!(quote_deposit(&pool(), &n(1000), &n(0)), (n(0), n(0)));
    }

    #[test]
    fn test_withdraw_applies_fee() {
        let mut pool = pool();
        pool.withdraw_fee_bps = 100; // 1%

        // A quarter of the pool: 250_000 / 500_000, each less 1%.
        let position = Position::new(2_500u32);
        let (x, y) = quote_withdraw(&pool, &position);
        assert_eq!(x, n(247_500));
        assert_eq!(y, n(495_000));
    }

    #[test]
    fn test_withdraw_partial_position() {
        let position = Position::new(2_500u32)
            .with_partial_ratio(DecimalValue::parse("0.5").unwrap())
            .unwrap();
        let (x, y) = quote_withdraw(&pool(), &position);
        assert_eq!(x, n(125_000));
        assert_eq!(y, n(250_000));
    }
}
