use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::round_half_up;

/// A salary expressed in foreign currency alongside its local-currency value.
///
/// The local figure is always derived from the foreign one; there is no way
/// to set it independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrossIncome {
    #[serde(with = "rust_decimal::serde::float")]
    salary_in_fx: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    salary_in_local: Decimal,
}

impl GrossIncome {
    /// Converts `salary_in_fx` at `exchange_rate`, rounding the local amount
    /// half-up to cents. Returns `None` if either input is negative or the
    /// product overflows.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use parafiscal_core::GrossIncome;
    ///
    /// let income = GrossIncome::convert(dec!(1000), dec!(4123.456)).unwrap();
    ///
    /// assert_eq!(income.salary_in_fx(), dec!(1000));
    /// assert_eq!(income.salary_in_local(), dec!(4123456.00));
    /// ```
    pub fn convert(
        salary_in_fx: Decimal,
        exchange_rate: Decimal,
    ) -> Option<Self> {
        if salary_in_fx < Decimal::ZERO || exchange_rate < Decimal::ZERO {
            return None;
        }
        let salary_in_local = salary_in_fx.checked_mul(exchange_rate)?;
        Some(Self {
            salary_in_fx,
            salary_in_local: round_half_up(salary_in_local),
        })
    }

    /// Scales both amounts by `periods`, e.g. 12 to turn a monthly figure
    /// into an annual one. Returns `None` if `periods` is negative or the
    /// result overflows.
    pub fn times(
        &self,
        periods: Decimal,
    ) -> Option<Self> {
        if periods < Decimal::ZERO {
            return None;
        }
        Some(Self {
            salary_in_fx: self.salary_in_fx.checked_mul(periods)?,
            salary_in_local: self.salary_in_local.checked_mul(periods)?,
        })
    }

    pub fn salary_in_fx(&self) -> Decimal {
        self.salary_in_fx
    }

    pub fn salary_in_local(&self) -> Decimal {
        self.salary_in_local
    }
}
