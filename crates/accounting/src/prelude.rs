//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used items from the crate.
//!
//! # Example
//!
//! ```rust
//! use pricer_accounting::prelude::*;
//! ```

// Swap quoting
pub use crate::swap::{apply_slippage, quote_forward_swap, quote_min_output, quote_reverse_swap};

// Deposits and withdrawals
pub use crate::deposit::{quote_deposit, quote_withdraw};

// Share accounting
pub use crate::shares::{position_balance, share_coin_amounts, share_of_pool};

// Prices
pub use crate::price::{buy_price, price, sell_price};

// Metrics
pub use crate::metrics::{
    PoolValuation, SideValuation, estimated_apr, total_volume, tvl, volume_24h,
};

// Domain types quoting code always needs
pub use pricer_domain::{
    CurveType, DecimalValue, DomainError, FeeDirection, Pool, PoolStatus, Position, TradeStats,
};
