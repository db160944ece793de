//! APR, TVL and volume estimation.
//!
//! Everything here values display metrics in an external unit of account
//! (the chain's primary asset, or simply "dollars" when a side is a
//! recognized stable-valued token). `None` means the metric cannot be
//! established from the given inputs; it is never an error.

use crate::price;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use pricer_domain::Pool;

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// How one pool side is valued externally.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideValuation {
    /// The side is the chain's primary asset, priced by the caller's oracle.
    pub is_primary: bool,
    /// The side is a recognized stable-valued token, assumed at 1.0.
    pub is_stable: bool,
}

/// Caller-supplied valuation context for a pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolValuation {
    /// External unit price of the chain's primary asset, if known.
    pub primary_price: Option<f64>,
    /// Valuation of the X side.
    pub side_x: SideValuation,
    /// Valuation of the Y side.
    pub side_y: SideValuation,
}

/// Annualized trading-fee yield from the most recent 24h capture window.
///
/// Each side's realized volume is annualized independently against its own
/// reserve with half the LP fee attributed to it, then the two rates are
/// averaged. The halving and the unweighted average mirror settlement-side
/// reporting; treat the result as an approximation, not a verified model.
/// Unavailable (`None`) when a reserve is empty or no time has elapsed
/// since the capture.
pub fn estimated_apr(pool: &Pool, now_secs: u64) -> Option<f64> {
    if pool.reserve_x.is_zero() || pool.reserve_y.is_zero() {
        return None;
    }
    let elapsed = now_secs.saturating_sub(pool.stats.stats_captured_at);
    if elapsed == 0 {
        return None;
    }

    let fee_rate = pool.total_lp_fee_bps() as f64 / 10_000.0 * 0.5;
    let annualize = |volume: &BigUint, reserve: &BigUint| -> f64 {
        let daily = volume.to_f64().unwrap_or(f64::NAN) / elapsed as f64 * SECONDS_PER_DAY;
        daily * fee_rate / reserve.to_f64().unwrap_or(f64::NAN) * DAYS_PER_YEAR
    };

    let apr_x = annualize(&pool.stats.trade_x_24h, &pool.reserve_x);
    let apr_y = annualize(&pool.stats.trade_y_24h, &pool.reserve_y);
    Some((apr_x + apr_y) / 2.0)
}

/// External unit prices for the two sides, if they can be established.
///
/// A side prices directly when it is the primary asset (via the supplied
/// oracle price) or a recognized stable token; otherwise its price derives
/// from the other side through the pool's own mid price. `None` when
/// neither side can be priced.
fn side_prices(
    pool: &Pool,
    decimals_x: u8,
    decimals_y: u8,
    valuation: &PoolValuation,
) -> Option<(f64, f64)> {
    let direct = |side: &SideValuation| -> Option<f64> {
        if side.is_primary {
            valuation.primary_price
        } else if side.is_stable {
            Some(1.0)
        } else {
            None
        }
    };

    let mid = price::price(pool, decimals_x, decimals_y);
    match (direct(&valuation.side_x), direct(&valuation.side_y)) {
        (Some(px), Some(py)) => Some((px, py)),
        // One whole X trades for `mid` whole Y.
        (None, Some(py)) => Some((mid * py, py)),
        (Some(px), None) if mid != 0.0 => Some((px, px / mid)),
        _ => None,
    }
}

fn to_whole(amount: &BigUint, decimals: u8) -> f64 {
    amount.to_f64().unwrap_or(f64::NAN) / 10f64.powi(decimals as i32)
}

/// Total value locked in the external unit of account.
pub fn tvl(pool: &Pool, decimals_x: u8, decimals_y: u8, valuation: &PoolValuation) -> Option<f64> {
    let (px, py) = side_prices(pool, decimals_x, decimals_y, valuation)?;
    Some(to_whole(&pool.reserve_x, decimals_x) * px + to_whole(&pool.reserve_y, decimals_y) * py)
}

/// Volume since the last 24h capture, in the external unit of account.
pub fn volume_24h(
    pool: &Pool,
    decimals_x: u8,
    decimals_y: u8,
    valuation: &PoolValuation,
) -> Option<f64> {
    let (px, py) = side_prices(pool, decimals_x, decimals_y, valuation)?;
    Some(
        to_whole(&pool.stats.trade_x_24h, decimals_x) * px
            + to_whole(&pool.stats.trade_y_24h, decimals_y) * py,
    )
}

/// Lifetime volume, in the external unit of account.
pub fn total_volume(
    pool: &Pool,
    decimals_x: u8,
    decimals_y: u8,
    valuation: &PoolValuation,
) -> Option<f64> {
    let (px, py) = side_prices(pool, decimals_x, decimals_y, valuation)?;
    Some(
        to_whole(&pool.stats.total_trade_x, decimals_x) * px
            + to_whole(&pool.stats.total_trade_y, decimals_y) * py,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_domain::{CurveType, FeeDirection, TradeStats};

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn pool() -> Pool {
        Pool {
            reserve_x: n(1_000_000),
            reserve_y: n(1_000_000),
            lsp_supply: n(10_000),
            curve: CurveType::ConstantProduct,
            fee_direction: FeeDirection::ChargeOnX,
            admin_fee_bps: 0,
            lp_fee_bps: 30,
            incentive_fee_bps: 0,
            connect_fee_bps: 0,
            withdraw_fee_bps: 0,
            frozen: false,
            stats: TradeStats {
                total_trade_x: n(10_000_000),
                total_trade_y: n(10_000_000),
                trade_x_24h: n(1_000_000),
                trade_y_24h: n(1_000_000),
                stats_captured_at: 1_000_000,
                last_trade_at: 1_086_400,
            },
        }
    }

    #[test]
    fn test_estimated_apr() {
        // Exactly one day elapsed, so the window volume is the daily
        // volume: each side turned its reserve over once. Per side:
        // 1.0 turnover * (0.003 * 0.5) * 365 = 0.5475, and the average of
        // two equal sides is the same.
        let apr = estimated_apr(&pool(), 1_086_400).unwrap();
        assert!((apr - 0.5475).abs() < 1e-12, "got {apr}");
    }

    #[test]
    fn test_apr_unavailable() {
        // No elapsed time since capture.
        assert_eq!(estimated_apr(&pool(), 1_000_000), None);

        let mut drained = pool();
        drained.reserve_x = n(0);
        assert_eq!(estimated_apr(&drained, 1_086_400), None);
    }

    #[test]
    fn test_tvl_with_one_stable_side() {
        // 2.0 X (6 decimals) against 3.0 Y (9 decimals), Y stable at 1.0.
        // Mid price = (3e9 / 2e6) * 10^(6-9) = 1.5 Y per X.
        // TVL = 2.0 * 1.5 + 3.0 * 1.0 = 6.0
        let mut p = pool();
        p.reserve_x = n(2_000_000);
        p.reserve_y = n(3_000_000_000);
        let valuation = PoolValuation {
            primary_price: None,
            side_x: SideValuation::default(),
            side_y: SideValuation {
                is_stable: true,
                ..Default::default()
            },
        };
        let v = tvl(&p, 6, 9, &valuation).unwrap();
        assert!((v - 6.0).abs() < 1e-9, "got {v}");
    }

    #[test]
    fn test_tvl_with_primary_side() {
        // X is the primary asset at 4.0; Y prices through the pool:
        // mid = 1.0, so py = 4.0 and TVL = 1.0 * 4.0 + 1.0 * 4.0 = 8.0
        let valuation = PoolValuation {
            primary_price: Some(4.0),
            side_x: SideValuation {
                is_primary: true,
                ..Default::default()
            },
            side_y: SideValuation::default(),
        };
        let v = tvl(&pool(), 6, 6, &valuation).unwrap();
        assert!((v - 8.0).abs() < 1e-9, "got {v}");
    }

    #[test]
    fn test_tvl_unavailable() {
        // Neither side can be priced.
        assert_eq!(tvl(&pool(), 6, 6, &PoolValuation::default()), None);

        // Primary side without an oracle price stays unpriceable.
        let valuation = PoolValuation {
            primary_price: None,
            side_x: SideValuation {
                is_primary: true,
                ..Default::default()
            },
            side_y: SideValuation::default(),
        };
        assert_eq!(tvl(&pool(), 6, 6, &valuation), None);
    }

    #[test]
    fn test_volume_valuation() {
        // Both sides stable at 1.0: window volume 1.0 + 1.0, lifetime
        // volume 10.0 + 10.0.
        let valuation = PoolValuation {
            primary_price: None,
            side_x: SideValuation {
                is_stable: true,
                ..Default::default()
            },
            side_y: SideValuation {
                is_stable: true,
                ..Default::default()
            },
        };
        let day = volume_24h(&pool(), 6, 6, &valuation).unwrap();
        let life = total_volume(&pool(), 6, 6, &valuation).unwrap();
        assert!((day - 2.0).abs() < 1e-9, "got {day}");
        assert!((life - 20.0).abs() < 1e-9, "got {life}");
    }
}
