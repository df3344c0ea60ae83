//! Error types for parafiscal calculations.
//!
//! Every error is raised during validation, before any figure is computed,
//! so a failed call never yields a partial breakdown.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by [`crate::ParafiscalCalculator`] and [`crate::compute`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParafiscalError {
    /// A salary or exchange rate was zero, negative, non-finite or too large
    /// to convert.
    #[error("{field} must be a positive finite amount, got {value}")]
    InvalidInput { field: &'static str, value: String },

    /// The requested risk level has no configured rate.
    #[error("risk level {0} is not configured")]
    UnknownRiskLevel(u32),

    /// The rate set failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
}

impl ParafiscalError {
    pub(crate) fn invalid_input(
        field: &'static str,
        value: impl ToString,
    ) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

/// Defects detected while validating a [`crate::ParafiscalRates`] bundle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The health contribution rate must be between 0 and 1.
    #[error("health rate must be between 0 and 1, got {0}")]
    InvalidHealthRate(Decimal),

    /// The retirement savings rate must be between 0 and 1.
    #[error("retirement rate must be between 0 and 1, got {0}")]
    InvalidRetirementRate(Decimal),

    /// No professional-risk levels were configured.
    #[error("no risk levels configured")]
    NoRiskLevels,

    /// A professional-risk level appears more than once.
    #[error("risk level {0} is configured more than once")]
    DuplicateRiskLevel(u32),

    /// A professional-risk rate must be between 0 and 1.
    #[error("rate for risk level {level} must be between 0 and 1, got {rate}")]
    InvalidRiskRate { level: u32, rate: Decimal },

    /// No income tax brackets were provided.
    #[error("no income tax brackets provided")]
    NoIncomeTaxBrackets,

    /// A bracket threshold must be non-negative.
    #[error("income tax bracket threshold must be non-negative, got {0}")]
    NegativeBracketThreshold(Decimal),

    /// Bracket thresholds must be strictly ascending.
    #[error("income tax bracket thresholds must be strictly ascending, got {next} after {previous}")]
    UnorderedBracketThresholds { previous: Decimal, next: Decimal },

    /// A bracket's marginal rate must be between 0 and 1.
    #[error("income tax bracket rate must be between 0 and 1, got {rate} at threshold {threshold}")]
    InvalidBracketRate { threshold: Decimal, rate: Decimal },

    /// The share of income forming the contribution base must be in (0, 1].
    #[error("ibc percentage must be greater than 0 and at most 1, got {0}")]
    InvalidIbcPercentage(Decimal),

    /// Contribution base bounds must be non-negative.
    #[error("ibc bound must be non-negative, got {0}")]
    NegativeIbcBound(Decimal),

    /// The contribution base floor exceeds its ceiling.
    #[error("ibc floor {floor} is greater than ibc ceiling {ceiling}")]
    IbcFloorAboveCeiling { floor: Decimal, ceiling: Decimal },
}
