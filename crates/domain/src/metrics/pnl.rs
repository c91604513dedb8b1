//! P&L, pool-share and withdrawal arithmetic.

use super::{PortfolioSummary, WithdrawalEstimate};
use crate::entities::Position;
use crate::errors::DomainError;
use rust_decimal::Decimal;

/// Percent change from `previous` to `current`. A zero previous value
/// yields zero.
#[must_use]
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    ((current - previous) / previous) * Decimal::from(100)
}

/// P&L relative to the invested amount, in percent. A zero investment
/// yields zero.
#[must_use]
pub fn pnl_percent(pnl_usd: Decimal, invested_usd: Decimal) -> Decimal {
    if invested_usd.is_zero() {
        return Decimal::ZERO;
    }
    (pnl_usd / invested_usd) * Decimal::from(100)
}

/// Share of the pool a position's value represents, in percent. A zero
/// TVL yields zero.
#[must_use]
pub fn pool_share_pct(position_value_usd: Decimal, tvl_usd: Decimal) -> Decimal {
    if tvl_usd.is_zero() {
        return Decimal::ZERO;
    }
    (position_value_usd / tvl_usd) * Decimal::from(100)
}

/// Proportional value and P&L for withdrawing `percentage` of a position.
///
/// # Errors
/// Returns [`DomainError::PercentageOutOfRange`] when `percentage` is
/// outside `[0, 100]`.
pub fn withdrawal_estimate(
    value_usd: Decimal,
    pnl_usd: Decimal,
    percentage: Decimal,
) -> Result<WithdrawalEstimate, DomainError> {
    if percentage < Decimal::ZERO || percentage > Decimal::from(100) {
        return Err(DomainError::PercentageOutOfRange { value: percentage });
    }
    let fraction = percentage / Decimal::from(100);
    Ok(WithdrawalEstimate {
        amount_usd: value_usd * fraction,
        pnl_usd: pnl_usd * fraction,
    })
}

/// Aggregates open positions into the portfolio header figures.
#[must_use]
pub fn summarize(positions: &[Position]) -> PortfolioSummary {
    let total_invested_usd: Decimal = positions.iter().map(|p| p.amount_invested_usd).sum();
    let total_value_usd: Decimal = positions.iter().map(|p| p.current_value_usd).sum();
    let total_pnl_usd: Decimal = positions.iter().map(|p| p.pnl_usd).sum();
    PortfolioSummary {
        total_invested_usd,
        total_value_usd,
        total_pnl_usd,
        pnl_pct: pnl_percent(total_pnl_usd, total_invested_usd),
        open_positions: positions.len(),
    }
}
