//! Pool filtering and sorting.
//!
//! The screener combines up to four independent criteria (risk level, APR
//! bucket, free-text search, sort key) into one pure pass over the pool
//! collection. The source slice is never mutated; repeated calls with
//! different criteria are safe.

use crate::entities::Pool;
use crate::enums::{AprBucket, RiskLevel, SortKey};
use rust_decimal::Decimal;

/// Filter criteria for the pool list. `None` on a criterion means "all".
#[derive(Debug, Clone, Default)]
pub struct PoolFilter {
    /// Only pools with exactly this risk level.
    pub risk: Option<RiskLevel>,
    /// Only pools whose APR falls in this bucket.
    pub apr_bucket: Option<AprBucket>,
    /// Case-insensitive substring match against the pool name and both
    /// token symbols. Empty matches everything.
    pub search: String,
    /// Descending sort key for the result.
    pub sort: SortKey,
}

impl PoolFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = Some(risk);
        self
    }

    #[must_use]
    pub fn with_apr_bucket(mut self, bucket: AprBucket) -> Self {
        self.apr_bucket = Some(bucket);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Returns true if the pool satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, pool: &Pool) -> bool {
        if self.risk.is_some_and(|risk| pool.risk != risk) {
            return false;
        }
        if self.apr_bucket.is_some_and(|bucket| !bucket.contains(pool.apr_pct)) {
            return false;
        }
        matches_search(pool, &self.search)
    }
}

/// Applies the filter and returns a new list sorted descending by the
/// filter's sort key. An unmatched combination yields an empty Vec; the
/// caller renders the empty state. Equal sort keys keep source order.
#[must_use]
pub fn filter_pools(pools: &[Pool], filter: &PoolFilter) -> Vec<Pool> {
    let mut selected: Vec<Pool> = pools
        .iter()
        .filter(|pool| filter.matches(pool))
        .cloned()
        .collect();
    selected.sort_by(|a, b| sort_value(b, filter.sort).cmp(&sort_value(a, filter.sort)));
    selected
}

fn sort_value(pool: &Pool, key: SortKey) -> Decimal {
    match key {
        SortKey::Apr => pool.apr_pct,
        SortKey::Tvl => pool.tvl_usd,
        SortKey::Volume => pool.volume_24h_usd,
    }
}

fn matches_search(pool: &Pool, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    pool.name.to_lowercase().contains(&needle)
        || pool.token_a.symbol.to_lowercase().contains(&needle)
        || pool.token_b.symbol.to_lowercase().contains(&needle)
}
