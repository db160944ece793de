use crate::enums::{CurveType, FeeDirection, PoolStatus};
use crate::errors::DomainError;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Trade-volume counters carried on a pool snapshot.
///
/// Monotonically non-decreasing on chain; used only for derived metrics
/// (APR, volume), never for quoting correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStats {
    /// Lifetime X-side trade volume, in raw units.
    pub total_trade_x: BigUint,
    /// Lifetime Y-side trade volume, in raw units.
    pub total_trade_y: BigUint,
    /// X-side volume since the last 24h capture.
    pub trade_x_24h: BigUint,
    /// Y-side volume since the last 24h capture.
    pub trade_y_24h: BigUint,
    /// Unix seconds of the last 24h-counter capture.
    pub stats_captured_at: u64,
    /// Unix seconds of the last trade.
    pub last_trade_at: u64,
}

/// Immutable snapshot of one pool's economic state.
///
/// Constructed from externally-fetched on-chain state; every accounting
/// function treats it as frozen for the duration of a single quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Current X-token reserve, in raw units.
    pub reserve_x: BigUint,
    /// Current Y-token reserve, in raw units.
    pub reserve_y: BigUint,
    /// Total liquidity-share supply; zero means the pool is uninitialized.
    pub lsp_supply: BigUint,
    /// Pricing curve and its parameters.
    pub curve: CurveType,
    /// Which leg the admin fee is deducted from.
    pub fee_direction: FeeDirection,
    /// Protocol admin fee, in bps.
    pub admin_fee_bps: u32,
    /// Liquidity-provider fee, in bps.
    pub lp_fee_bps: u32,
    /// Incentive fee paid alongside the LP fee, in bps.
    pub incentive_fee_bps: u32,
    /// Connect fee paid alongside the admin fee, in bps.
    pub connect_fee_bps: u32,
    /// Fee on withdrawals, in bps.
    pub withdraw_fee_bps: u32,
    /// Swaps and deposits are disallowed while frozen.
    pub frozen: bool,
    /// Trade-volume counters.
    pub stats: TradeStats,
}

impl Pool {
    /// Combined admin-side fee: admin + connect.
    pub fn total_admin_fee_bps(&self) -> u32 {
        self.admin_fee_bps + self.connect_fee_bps
    }

    /// Combined LP-side fee: incentive + LP.
    pub fn total_lp_fee_bps(&self) -> u32 {
        self.incentive_fee_bps + self.lp_fee_bps
    }

    /// Whether liquidity has ever been deposited.
    pub fn is_initialized(&self) -> bool {
        !self.lsp_supply.is_zero()
    }

    /// Availability gate for swaps and deposits.
    pub fn swap_status(&self) -> PoolStatus {
        if self.frozen {
            PoolStatus::Frozen
        } else if self.reserve_x.is_zero() || self.reserve_y.is_zero() {
            PoolStatus::EmptyReserves
        } else {
            PoolStatus::Available
        }
    }

    /// Checks configuration preconditions.
    ///
    /// Out-of-range fees or stable-curve parameters are a caller bug, not
    /// market state, so they fail loudly here instead of being clamped in
    /// the quoting path.
    pub fn validate(&self) -> Result<(), DomainError> {
        for bps in [
            self.admin_fee_bps,
            self.lp_fee_bps,
            self.incentive_fee_bps,
            self.connect_fee_bps,
            self.withdraw_fee_bps,
            self.total_admin_fee_bps(),
            self.total_lp_fee_bps(),
        ] {
            if bps > 10_000 {
                return Err(DomainError::FeeOutOfRange(bps));
            }
        }
        if let CurveType::StableSwap {
            amplification,
            scale_x,
            scale_y,
        } = self.curve
        {
            if amplification < 1 {
                return Err(DomainError::AmplificationTooLow(amplification));
            }
            if scale_x < 1 || scale_y < 1 {
                return Err(DomainError::ZeroScale);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Pool {
        Pool {
            reserve_x: BigUint::from(1_000_000u64),
            reserve_y: BigUint::from(2_000_000u64),
            lsp_supply: BigUint::from(1_000_000u64),
            curve: CurveType::ConstantProduct,
            fee_direction: FeeDirection::ChargeOnX,
            admin_fee_bps: 10,
            lp_fee_bps: 20,
            incentive_fee_bps: 5,
            connect_fee_bps: 5,
            withdraw_fee_bps: 0,
            frozen: false,
            stats: TradeStats::default(),
        }
    }

    #[test]
    fn test_fee_totals() {
        let p = pool();
        assert_eq!(p.total_admin_fee_bps(), 15);
        assert_eq!(p.total_lp_fee_bps(), 25);
    }

    #[test]
    fn test_swap_status() {
        let mut p = pool();
        assert_eq!(p.swap_status(), PoolStatus::Available);

        p.frozen = true;
        assert_eq!(p.swap_status(), PoolStatus::Frozen);

        // Frozen takes precedence over empty reserves.
        p.reserve_x = BigUint::zero();
        assert_eq!(p.swap_status(), PoolStatus::Frozen);

        p.frozen = false;
        assert_eq!(p.swap_status(), PoolStatus::EmptyReserves);
    }

    #[test]
    fn test_validate() {
        let mut p = pool();
        assert_eq!(p.validate(), Ok(()));

        p.admin_fee_bps = 10_001;
        assert_eq!(p.validate(), Err(DomainError::FeeOutOfRange(10_001)));

        let mut p = pool();
        p.curve = CurveType::StableSwap {
            amplification: 0,
            scale_x: 1,
            scale_y: 1,
        };
        assert_eq!(p.validate(), Err(DomainError::AmplificationTooLow(0)));

        p.curve = CurveType::StableSwap {
            amplification: 100,
            scale_x: 0,
            scale_y: 1,
        };
        assert_eq!(p.validate(), Err(DomainError::ZeroScale));
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let p = pool();
        let json = serde_json::to_string(&p).unwrap();
        let back: Pool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
