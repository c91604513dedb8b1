//! Business thresholds kept as explicit configuration.
//!
//! The health-band cutoffs are product-defined constants with no derivable
//! rationale, so they live here as data rather than inline literals.

use crate::enums::HealthStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cutoffs for classifying a pool's health score into a band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum health score (percent) for [`HealthStatus::High`].
    pub health_high_min: Decimal,
    /// Minimum health score (percent) for [`HealthStatus::Medium`].
    pub health_medium_min: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            health_high_min: Decimal::from(80),
            health_medium_min: Decimal::from(50),
        }
    }
}

/// Classifies a health score (percent) against the configured cutoffs.
#[must_use]
pub fn health_status(health_pct: Decimal, thresholds: &Thresholds) -> HealthStatus {
    if health_pct >= thresholds.health_high_min {
        HealthStatus::High
    } else if health_pct >= thresholds.health_medium_min {
        HealthStatus::Medium
    } else {
        HealthStatus::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_health_bands() {
        let t = Thresholds::default();
        assert_eq!(health_status(dec!(92), &t), HealthStatus::High);
        assert_eq!(health_status(dec!(80), &t), HealthStatus::High);
        assert_eq!(health_status(dec!(79.9), &t), HealthStatus::Medium);
        assert_eq!(health_status(dec!(50), &t), HealthStatus::Medium);
        assert_eq!(health_status(dec!(49), &t), HealthStatus::Low);
    }
}
