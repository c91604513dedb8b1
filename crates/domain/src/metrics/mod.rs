//! Derived financial metrics.
//!
//! Every percentage and ratio the dashboard displays is computed here, in
//! one place, so rounding and edge-case handling cannot diverge between
//! views. All functions are pure; the zero-denominator policy is uniform:
//! a quotient with a zero denominator evaluates to zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod deposit;
pub mod pnl;

/// Preview of what a deposit into a pool buys and earns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositEstimate {
    /// Amount of the first pool token the deposit converts into.
    pub token_a_amount: Decimal,
    /// Amount of the second pool token the deposit converts into.
    pub token_b_amount: Decimal,
    /// Share of the pool's trailing daily fee revenue, in USD.
    pub daily_yield_usd: Decimal,
    /// Daily yield annualized over 365 days, in USD.
    pub yearly_yield_usd: Decimal,
    /// Effective APR of this deposit, in percent.
    pub apr_pct: Decimal,
}

/// Preview of a partial or full withdrawal from a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalEstimate {
    /// Value withdrawn, in USD.
    pub amount_usd: Decimal,
    /// P&L attributed to the withdrawn share, in USD.
    pub pnl_usd: Decimal,
}

/// Aggregate view over all open positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_invested_usd: Decimal,
    pub total_value_usd: Decimal,
    pub total_pnl_usd: Decimal,
    /// Total P&L relative to total invested, in percent.
    pub pnl_pct: Decimal,
    pub open_positions: usize,
}
