use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown risk level: {other}")),
        }
    }
}

/// Fixed APR ranges the pool screener offers. Bounds are half-open
/// `[lo, hi)` in percent; `FiftyPlus` is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AprBucket {
    UpToTen,
    TenToTwenty,
    TwentyToFifty,
    FiftyPlus,
}

impl AprBucket {
    /// Returns true if the given APR (in percent) falls inside this bucket.
    #[must_use]
    pub fn contains(&self, apr_pct: Decimal) -> bool {
        let ten = Decimal::from(10);
        let twenty = Decimal::from(20);
        let fifty = Decimal::from(50);
        match self {
            Self::UpToTen => apr_pct < ten,
            Self::TenToTwenty => apr_pct >= ten && apr_pct < twenty,
            Self::TwentyToFifty => apr_pct >= twenty && apr_pct < fifty,
            Self::FiftyPlus => apr_pct >= fifty,
        }
    }
}

impl fmt::Display for AprBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpToTen => write!(f, "0-10"),
            Self::TenToTwenty => write!(f, "10-20"),
            Self::TwentyToFifty => write!(f, "20-50"),
            Self::FiftyPlus => write!(f, "50+"),
        }
    }
}

impl FromStr for AprBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-10" => Ok(Self::UpToTen),
            "10-20" => Ok(Self::TenToTwenty),
            "20-50" => Ok(Self::TwentyToFifty),
            "50+" => Ok(Self::FiftyPlus),
            other => Err(format!("unknown APR bucket: {other}")),
        }
    }
}

/// Sort key for the pool list, always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Apr,
    Tvl,
    Volume,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apr => write!(f, "apr"),
            Self::Tvl => write!(f, "tvl"),
            Self::Volume => write!(f, "volume"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apr" => Ok(Self::Apr),
            "tvl" => Ok(Self::Tvl),
            "volume" => Ok(Self::Volume),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Health band derived from a pool's health score (see [`crate::thresholds`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    High,
    Medium,
    Low,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_apr_bucket_bounds() {
        assert!(AprBucket::UpToTen.contains(dec!(9.99)));
        assert!(!AprBucket::UpToTen.contains(dec!(10)));
        assert!(AprBucket::TenToTwenty.contains(dec!(10)));
        assert!(AprBucket::TwentyToFifty.contains(dec!(32.85)));
        assert!(AprBucket::FiftyPlus.contains(dec!(50)));
        assert!(AprBucket::FiftyPlus.contains(dec!(400)));
    }

    #[test]
    fn test_round_trip_parsing() {
        for s in ["low", "medium", "high"] {
            assert_eq!(s.parse::<RiskLevel>().unwrap().to_string(), s);
        }
        for s in ["0-10", "10-20", "20-50", "50+"] {
            assert_eq!(s.parse::<AprBucket>().unwrap().to_string(), s);
        }
        assert!("0-100".parse::<AprBucket>().is_err());
    }
}
