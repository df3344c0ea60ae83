//! Parafiscal contribution calculations for independent workers.
//!
//! Converts a salary paid in foreign currency into local currency and derives
//! the monthly social security contributions and suggested income tax
//! withholding from it.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Monthly and annual salary, in foreign and local currency |
//! | 2    | IBC: monthly local salary × IBC percentage, clamped to the configured bounds |
//! | 3    | Health, retirement savings and professional-risk contributions on the IBC |
//! | 4    | Social security total (sum of step 3) |
//! | 5    | Suggested monthly income tax from the progressive schedule |
//! | 6    | Parafiscals total (step 4 + step 5) |
//! | 7    | Net income: monthly local salary − parafiscals total |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use parafiscal_core::{IncomeTaxBracket, ParafiscalRates, RiskLevels, compute};
//!
//! let rates = ParafiscalRates::new(
//!     dec!(0.125),
//!     dec!(0.16),
//!     RiskLevels::new([(1, dec!(0.00522))]).unwrap(),
//!     vec![IncomeTaxBracket::new(dec!(0), dec!(0))],
//! );
//!
//! let output = compute(dec!(1000), dec!(4000), 1, &rates).unwrap();
//!
//! assert_eq!(output.parafiscals().social_security_total(), dec!(1160880));
//! assert_eq!(output.net_income(), dec!(2839120));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{checked_sum, clamp_between, max, round_half_up};
use crate::calculations::income_tax::ProgressiveTaxSchedule;
use crate::{
    ConfigurationError, GrossIncome, IncomeCalculationSection, IncomeTaxBase,
    IndependentSalaryOutput, ParafiscalError, ParafiscalRates, ParafiscalsSection, SalaryInput,
    SalaryPeriod,
};

const MONTHS_PER_YEAR: i64 = 12;

/// Runs a single calculation against `rates`.
///
/// Equivalent to building a [`ParafiscalCalculator`] and calling
/// [`ParafiscalCalculator::calculate`] with a monthly [`SalaryInput`].
///
/// # Errors
///
/// Returns [`ParafiscalError`] if:
/// - `rates` fails validation
/// - `salary_in_fx` or `exchange_rate` is not positive
/// - `risk_level` is not configured
pub fn compute(
    salary_in_fx: Decimal,
    exchange_rate: Decimal,
    risk_level: u32,
    rates: &ParafiscalRates,
) -> Result<IndependentSalaryOutput, ParafiscalError> {
    let calculator = ParafiscalCalculator::new(rates)?;
    calculator.calculate(&SalaryInput::monthly(
        salary_in_fx,
        exchange_rate,
        risk_level,
    ))
}

/// Calculator bound to a validated rate set.
///
/// The rate set is validated once in [`ParafiscalCalculator::new`]; the
/// calculator can then be reused for any number of inputs.
#[derive(Debug, Clone, Copy)]
pub struct ParafiscalCalculator<'a> {
    rates: &'a ParafiscalRates,
    schedule: ProgressiveTaxSchedule<'a>,
}

impl<'a> ParafiscalCalculator<'a> {
    /// Validates `rates` and creates a calculator over them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if any rate, bracket or IBC bound is
    /// invalid. See [`ParafiscalRates::validate`].
    pub fn new(rates: &'a ParafiscalRates) -> Result<Self, ConfigurationError> {
        rates.validate()?;
        let schedule = ProgressiveTaxSchedule::new(&rates.income_tax_brackets)?;
        Ok(Self { rates, schedule })
    }

    /// Calculates the income and parafiscal breakdown for `input`.
    ///
    /// All validation happens before any figure is computed.
    ///
    /// # Errors
    ///
    /// Returns [`ParafiscalError::InvalidInput`] if the salary or exchange
    /// rate is not positive or the converted amounts or contributions
    /// overflow, and
    /// [`ParafiscalError::UnknownRiskLevel`] if the risk level has no rate.
    pub fn calculate(
        &self,
        input: &SalaryInput,
    ) -> Result<IndependentSalaryOutput, ParafiscalError> {
        input.validate()?;
        let risk_rate = self
            .rates
            .risk_levels
            .rate(input.risk_level)
            .ok_or(ParafiscalError::UnknownRiskLevel(input.risk_level))?;

        // Step 1: Gross income
        let income_calculation = self.income_calculation(input)?;
        let monthly_local = income_calculation.monthly.salary_in_local();

        // Step 2: Contribution base
        let ibc = self.contribution_base(monthly_local);

        // Step 3: Contributions on the IBC
        let overflow = || ParafiscalError::invalid_input("ibc", ibc);
        let contribution = |rate: Decimal| ibc.checked_mul(rate).map(round_half_up);
        let health_tax = contribution(self.rates.health_rate).ok_or_else(overflow)?;
        let retirement_savings_tax =
            contribution(self.rates.retirement_rate).ok_or_else(overflow)?;
        let professional_risks_tax = contribution(risk_rate).ok_or_else(overflow)?;

        // Step 5: Suggested withholding
        let social_security_total =
            checked_sum(&[health_tax, retirement_savings_tax, professional_risks_tax])
                .ok_or_else(overflow)?;
        let taxable_income = self.taxable_income(ibc, social_security_total);
        let suggested_monthly_income_tax = self.schedule.tax_for(taxable_income);

        // Steps 4, 6 and 7 are sums computed by the output types
        let parafiscals = ParafiscalsSection::new(
            ibc,
            health_tax,
            retirement_savings_tax,
            professional_risks_tax,
            suggested_monthly_income_tax,
        )
        .ok_or_else(overflow)?;
        let output = IndependentSalaryOutput::new(income_calculation, parafiscals);

        debug!(
            risk_level = input.risk_level,
            monthly_local = %monthly_local,
            ibc = %ibc,
            parafiscals_total = %parafiscals.parafiscals_total(),
            net_income = %output.net_income(),
            "calculated parafiscals"
        );

        Ok(output)
    }

    pub fn rates(&self) -> &'a ParafiscalRates {
        self.rates
    }

    /// Builds the monthly and annual income figures.
    ///
    /// A monthly salary is multiplied by twelve for the annual figures; an
    /// annual salary is kept as given and divided by twelve (rounded to
    /// cents) for the monthly ones.
    fn income_calculation(
        &self,
        input: &SalaryInput,
    ) -> Result<IncomeCalculationSection, ParafiscalError> {
        let overflow = || ParafiscalError::invalid_input("salary_in_fx", input.salary_in_fx);
        let months = Decimal::from(MONTHS_PER_YEAR);

        let (monthly, annual) = match input.period {
            SalaryPeriod::Monthly => {
                let monthly = GrossIncome::convert(input.salary_in_fx, input.exchange_rate)
                    .ok_or_else(overflow)?;
                let annual = monthly.times(months).ok_or_else(overflow)?;
                (monthly, annual)
            }
            SalaryPeriod::Annual => {
                let annual = GrossIncome::convert(input.salary_in_fx, input.exchange_rate)
                    .ok_or_else(overflow)?;
                let monthly_fx = round_half_up(input.salary_in_fx / months);
                let monthly =
                    GrossIncome::convert(monthly_fx, input.exchange_rate).ok_or_else(overflow)?;
                (monthly, annual)
            }
        };

        Ok(IncomeCalculationSection { annual, monthly })
    }

    /// Calculates the IBC from the monthly local salary.
    fn contribution_base(
        &self,
        monthly_local: Decimal,
    ) -> Decimal {
        let share = round_half_up(monthly_local * self.rates.ibc_percentage);
        let ibc = clamp_between(share, self.rates.ibc_floor, self.rates.ibc_ceiling);

        if ibc != share {
            warn!(
                share = %share,
                ibc = %ibc,
                "contribution base clamped to configured bounds"
            );
        }

        ibc
    }

    /// Selects the figure the income tax schedule is applied to.
    fn taxable_income(
        &self,
        ibc: Decimal,
        social_security_total: Decimal,
    ) -> Decimal {
        match self.rates.income_tax_base {
            IncomeTaxBase::Ibc => ibc,
            IncomeTaxBase::IbcLessSocialSecurity => max(ibc - social_security_total, Decimal::ZERO),
        }
    }
}
