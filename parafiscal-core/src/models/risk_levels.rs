use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ConfigurationError;
use crate::calculations::common::is_fraction;

/// A single `(level, rate)` entry as it appears in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevelRate {
    pub level: u32,
    pub rate: Decimal,
}

/// Professional-risk contribution rates keyed by risk level code.
///
/// The mapping is validated when built: codes are unique, at least one level
/// exists and every rate lies in `[0, 1]`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use parafiscal_core::RiskLevels;
///
/// let levels = RiskLevels::new([(1, dec!(0.00522)), (2, dec!(0.01044))]).unwrap();
///
/// assert_eq!(levels.rate(2), Some(dec!(0.01044)));
/// assert_eq!(levels.rate(99), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RiskLevelRate>", into = "Vec<RiskLevelRate>")]
pub struct RiskLevels(BTreeMap<u32, Decimal>);

impl RiskLevels {
    /// Builds a validated mapping from `(level, rate)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if:
    /// - no levels are given
    /// - a level appears twice
    /// - a rate is outside `[0, 1]`
    pub fn new(entries: impl IntoIterator<Item = (u32, Decimal)>) -> Result<Self, ConfigurationError> {
        let mut levels = BTreeMap::new();
        for (level, rate) in entries {
            if !is_fraction(rate) {
                return Err(ConfigurationError::InvalidRiskRate { level, rate });
            }
            if levels.insert(level, rate).is_some() {
                return Err(ConfigurationError::DuplicateRiskLevel(level));
            }
        }
        if levels.is_empty() {
            return Err(ConfigurationError::NoRiskLevels);
        }
        Ok(Self(levels))
    }

    /// Returns the rate for `level`, if configured.
    pub fn rate(
        &self,
        level: u32,
    ) -> Option<Decimal> {
        self.0.get(&level).copied()
    }

    /// Configured level codes in ascending order.
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<RiskLevelRate>> for RiskLevels {
    type Error = ConfigurationError;

    fn try_from(entries: Vec<RiskLevelRate>) -> Result<Self, Self::Error> {
        Self::new(entries.into_iter().map(|e| (e.level, e.rate)))
    }
}

impl From<RiskLevels> for Vec<RiskLevelRate> {
    fn from(levels: RiskLevels) -> Self {
        levels
            .0
            .into_iter()
            .map(|(level, rate)| RiskLevelRate { level, rate })
            .collect()
    }
}
