//! Deposit previews: token split and fee-yield estimates.

use super::DepositEstimate;
use crate::entities::Pool;
use rust_decimal::Decimal;

const DAYS_PER_YEAR: u32 = 365;

/// Amount of one token a USD deposit converts into at the given price.
/// A zero price yields zero.
#[must_use]
pub fn token_split(amount_usd: Decimal, token_price_usd: Decimal) -> Decimal {
    if token_price_usd.is_zero() {
        return Decimal::ZERO;
    }
    amount_usd / token_price_usd
}

/// Daily fee revenue proportional to the depositor's share of TVL:
/// `fees_24h * (amount / tvl)`. A zero TVL yields zero share.
#[must_use]
pub fn estimated_daily_yield(
    amount_usd: Decimal,
    fees_24h_usd: Decimal,
    tvl_usd: Decimal,
) -> Decimal {
    if tvl_usd.is_zero() {
        return Decimal::ZERO;
    }
    fees_24h_usd * (amount_usd / tvl_usd)
}

/// Daily yield annualized over 365 days.
#[must_use]
pub fn estimated_yearly_yield(daily_yield_usd: Decimal) -> Decimal {
    daily_yield_usd * Decimal::from(DAYS_PER_YEAR)
}

/// Effective APR of a deposit, in percent: `(yearly / amount) * 100`.
/// A zero deposit yields zero.
#[must_use]
pub fn estimated_apr(yearly_yield_usd: Decimal, amount_usd: Decimal) -> Decimal {
    if amount_usd.is_zero() {
        return Decimal::ZERO;
    }
    (yearly_yield_usd / amount_usd) * Decimal::from(100)
}

/// Full deposit preview for a pool. A pool with no recorded 24h fees is
/// treated as earning nothing.
#[must_use]
pub fn estimate_deposit(pool: &Pool, amount_usd: Decimal) -> DepositEstimate {
    let fees_24h = pool.fees_24h_usd.unwrap_or(Decimal::ZERO);
    let daily = estimated_daily_yield(amount_usd, fees_24h, pool.tvl_usd);
    let yearly = estimated_yearly_yield(daily);
    DepositEstimate {
        token_a_amount: token_split(amount_usd, pool.token_a.price_usd),
        token_b_amount: token_split(amount_usd, pool.token_b.price_usd),
        daily_yield_usd: daily,
        yearly_yield_usd: yearly,
        apr_pct: estimated_apr(yearly, amount_usd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PoolToken;
    use crate::enums::RiskLevel;
    use rust_decimal_macros::dec;

    fn pool(tvl: Decimal, fees_24h: Option<Decimal>) -> Pool {
        Pool {
            id: "p1".to_string(),
            name: "SOL-USDC".to_string(),
            token_a: PoolToken::new("SOL", "Solana", dec!(200)),
            token_b: PoolToken::new("USDC", "USD Coin", dec!(1)),
            tvl_usd: tvl,
            apr_pct: dec!(12.4),
            volume_24h_usd: dec!(480000),
            volume_7d_usd: dec!(3100000),
            risk: RiskLevel::Medium,
            fees_24h_usd: fees_24h,
            utilization_pct: None,
            health_pct: None,
        }
    }

    #[test]
    fn test_worked_example() {
        // tvl 2.5M, 2,250 daily fees, 10k deposit.
        let est = estimate_deposit(&pool(dec!(2500000), Some(dec!(2250))), dec!(10000));
        assert_eq!(est.daily_yield_usd, dec!(9.00));
        assert_eq!(est.yearly_yield_usd, dec!(3285.00));
        assert_eq!(est.apr_pct, dec!(32.85));
    }

    #[test]
    fn test_token_split() {
        assert_eq!(token_split(dec!(10000), dec!(200)), dec!(50));
        assert_eq!(token_split(dec!(10000), dec!(1)), dec!(10000));
    }

    #[test]
    fn test_zero_deposit_yields_zero_everywhere() {
        let est = estimate_deposit(&pool(dec!(2500000), Some(dec!(2250))), Decimal::ZERO);
        assert_eq!(est.token_a_amount, Decimal::ZERO);
        assert_eq!(est.token_b_amount, Decimal::ZERO);
        assert_eq!(est.daily_yield_usd, Decimal::ZERO);
        assert_eq!(est.yearly_yield_usd, Decimal::ZERO);
        assert_eq!(est.apr_pct, Decimal::ZERO);
    }

    #[test]
    fn test_zero_denominators_clamp_to_zero() {
        assert_eq!(token_split(dec!(500), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(
            estimated_daily_yield(dec!(500), dec!(100), Decimal::ZERO),
            Decimal::ZERO
        );
        assert_eq!(estimated_apr(dec!(3285), Decimal::ZERO), Decimal::ZERO);

        let est = estimate_deposit(&pool(Decimal::ZERO, Some(dec!(2250))), dec!(10000));
        assert_eq!(est.daily_yield_usd, Decimal::ZERO);
        assert_eq!(est.apr_pct, Decimal::ZERO);
    }

    #[test]
    fn test_missing_fee_data_means_zero_yield() {
        let est = estimate_deposit(&pool(dec!(2500000), None), dec!(10000));
        assert_eq!(est.daily_yield_usd, Decimal::ZERO);
        assert_eq!(est.yearly_yield_usd, Decimal::ZERO);
        // The token split does not depend on fee data.
        assert_eq!(est.token_a_amount, dec!(50));
    }
}
