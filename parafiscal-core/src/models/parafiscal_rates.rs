use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::is_fraction;
use crate::calculations::income_tax::validate_brackets;
use crate::{ConfigurationError, IncomeTaxBase, IncomeTaxBracket, RiskLevels};

/// The rate set a calculation runs against.
///
/// Legal parameters that vary by jurisdiction or year live here rather than
/// in code: contribution rates, the professional-risk table, the income tax
/// schedule and the bounds of the contribution base (IBC).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use parafiscal_core::{IncomeTaxBracket, ParafiscalRates, RiskLevels};
///
/// let rates = ParafiscalRates::new(
///     dec!(0.125),
///     dec!(0.16),
///     RiskLevels::new([(1, dec!(0.00522))]).unwrap(),
///     vec![IncomeTaxBracket::new(dec!(0), dec!(0))],
/// )
/// .with_ibc_percentage(dec!(0.40))
/// .with_ibc_bounds(Some(dec!(1423500)), Some(dec!(35587500)));
///
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParafiscalRates {
    /// Health contribution rate applied to the IBC.
    pub health_rate: Decimal,

    /// Retirement savings (pension) contribution rate applied to the IBC.
    pub retirement_rate: Decimal,

    /// Professional-risk rates by risk level.
    pub risk_levels: RiskLevels,

    /// Monthly income tax schedule, ascending by threshold.
    pub income_tax_brackets: Vec<IncomeTaxBracket>,

    /// Which figure the income tax schedule is applied to.
    #[serde(default)]
    pub income_tax_base: IncomeTaxBase,

    /// Share of monthly local income that forms the IBC before clamping.
    ///
    /// Defaults to 1, i.e. the whole monthly salary.
    #[serde(default = "default_ibc_percentage")]
    pub ibc_percentage: Decimal,

    /// Lowest allowed IBC, if the jurisdiction imposes one.
    #[serde(default)]
    pub ibc_floor: Option<Decimal>,

    /// Highest allowed IBC, if the jurisdiction imposes one.
    #[serde(default)]
    pub ibc_ceiling: Option<Decimal>,
}

fn default_ibc_percentage() -> Decimal {
    Decimal::ONE
}

impl ParafiscalRates {
    /// Creates a rate set with the whole salary as IBC, no clamping and the
    /// income tax applied net of social security.
    pub fn new(
        health_rate: Decimal,
        retirement_rate: Decimal,
        risk_levels: RiskLevels,
        income_tax_brackets: Vec<IncomeTaxBracket>,
    ) -> Self {
        Self {
            health_rate,
            retirement_rate,
            risk_levels,
            income_tax_brackets,
            income_tax_base: IncomeTaxBase::default(),
            ibc_percentage: default_ibc_percentage(),
            ibc_floor: None,
            ibc_ceiling: None,
        }
    }

    pub fn with_income_tax_base(
        mut self,
        base: IncomeTaxBase,
    ) -> Self {
        self.income_tax_base = base;
        self
    }

    pub fn with_ibc_percentage(
        mut self,
        percentage: Decimal,
    ) -> Self {
        self.ibc_percentage = percentage;
        self
    }

    pub fn with_ibc_bounds(
        mut self,
        floor: Option<Decimal>,
        ceiling: Option<Decimal>,
    ) -> Self {
        self.ibc_floor = floor;
        self.ibc_ceiling = ceiling;
        self
    }

    /// Validates every rate, the bracket sequence and the IBC bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if:
    /// - `health_rate` or `retirement_rate` is not in `[0, 1]`
    /// - `ibc_percentage` is not in `(0, 1]`
    /// - a bound is negative or the floor exceeds the ceiling
    /// - the bracket sequence is empty, unordered, has a negative threshold
    ///   or a rate outside `[0, 1]`
    ///
    /// Risk levels are validated when the [`RiskLevels`] value is built.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !is_fraction(self.health_rate) {
            return Err(ConfigurationError::InvalidHealthRate(self.health_rate));
        }
        if !is_fraction(self.retirement_rate) {
            return Err(ConfigurationError::InvalidRetirementRate(
                self.retirement_rate,
            ));
        }
        if self.ibc_percentage <= Decimal::ZERO || self.ibc_percentage > Decimal::ONE {
            return Err(ConfigurationError::InvalidIbcPercentage(
                self.ibc_percentage,
            ));
        }
        for bound in [self.ibc_floor, self.ibc_ceiling].into_iter().flatten() {
            if bound < Decimal::ZERO {
                return Err(ConfigurationError::NegativeIbcBound(bound));
            }
        }
        if let (Some(floor), Some(ceiling)) = (self.ibc_floor, self.ibc_ceiling) {
            if floor > ceiling {
                return Err(ConfigurationError::IbcFloorAboveCeiling { floor, ceiling });
            }
        }
        validate_brackets(&self.income_tax_brackets)
    }
}
