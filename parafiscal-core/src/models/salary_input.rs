use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParafiscalError;

/// The period a caller's salary figure covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryPeriod {
    #[default]
    Monthly,
    Annual,
}

/// Caller-supplied values for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Salary in foreign currency for `period`.
    pub salary_in_fx: Decimal,
    /// Local currency units per unit of foreign currency.
    pub exchange_rate: Decimal,
    /// Professional-risk level code.
    pub risk_level: u32,
    #[serde(default)]
    pub period: SalaryPeriod,
}

impl SalaryInput {
    pub fn monthly(
        salary_in_fx: Decimal,
        exchange_rate: Decimal,
        risk_level: u32,
    ) -> Self {
        Self {
            salary_in_fx,
            exchange_rate,
            risk_level,
            period: SalaryPeriod::Monthly,
        }
    }

    pub fn annual(
        salary_in_fx: Decimal,
        exchange_rate: Decimal,
        risk_level: u32,
    ) -> Self {
        Self {
            period: SalaryPeriod::Annual,
            ..Self::monthly(salary_in_fx, exchange_rate, risk_level)
        }
    }

    /// Builds an input from binary floating point figures.
    ///
    /// # Errors
    ///
    /// Returns [`ParafiscalError::InvalidInput`] if either figure is NaN,
    /// infinite, or not positive.
    ///
    /// ```
    /// use parafiscal_core::{ParafiscalError, SalaryInput, SalaryPeriod};
    ///
    /// let err = SalaryInput::from_f64(f64::NAN, 4000.0, 1, SalaryPeriod::Monthly).unwrap_err();
    ///
    /// assert!(matches!(err, ParafiscalError::InvalidInput { field: "salary_in_fx", .. }));
    /// ```
    pub fn from_f64(
        salary_in_fx: f64,
        exchange_rate: f64,
        risk_level: u32,
        period: SalaryPeriod,
    ) -> Result<Self, ParafiscalError> {
        let input = Self {
            salary_in_fx: finite_decimal("salary_in_fx", salary_in_fx)?,
            exchange_rate: finite_decimal("exchange_rate", exchange_rate)?,
            risk_level,
            period,
        };
        input.validate()?;
        Ok(input)
    }

    /// Checks that the salary and exchange rate are strictly positive.
    pub fn validate(&self) -> Result<(), ParafiscalError> {
        if self.salary_in_fx <= Decimal::ZERO {
            return Err(ParafiscalError::invalid_input(
                "salary_in_fx",
                self.salary_in_fx,
            ));
        }
        if self.exchange_rate <= Decimal::ZERO {
            return Err(ParafiscalError::invalid_input(
                "exchange_rate",
                self.exchange_rate,
            ));
        }
        Ok(())
    }
}

fn finite_decimal(
    field: &'static str,
    value: f64,
) -> Result<Decimal, ParafiscalError> {
    if !value.is_finite() {
        return Err(ParafiscalError::invalid_input(field, value));
    }
    Decimal::try_from(value).map_err(|_| ParafiscalError::invalid_input(field, value))
}
