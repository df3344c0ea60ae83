use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::GrossIncome;
use crate::calculations::common::checked_sum;

/// Gross income for the month and for the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeCalculationSection {
    pub annual: GrossIncome,
    pub monthly: GrossIncome,
}

/// Social security contributions and the suggested income tax withholding.
///
/// Totals are computed when the section is built and cannot be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParafiscalsSection {
    #[serde(with = "rust_decimal::serde::float")]
    ibc: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    health_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    retirement_savings_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    professional_risks_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    social_security_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    suggested_monthly_income_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    parafiscals_total: Decimal,
}

impl ParafiscalsSection {
    pub(crate) fn new(
        ibc: Decimal,
        health_tax: Decimal,
        retirement_savings_tax: Decimal,
        professional_risks_tax: Decimal,
        suggested_monthly_income_tax: Decimal,
    ) -> Option<Self> {
        let social_security_total =
            checked_sum(&[health_tax, retirement_savings_tax, professional_risks_tax])?;
        let parafiscals_total = social_security_total.checked_add(suggested_monthly_income_tax)?;
        Some(Self {
            ibc,
            health_tax,
            retirement_savings_tax,
            professional_risks_tax,
            social_security_total,
            suggested_monthly_income_tax,
            parafiscals_total,
        })
    }

    /// Contribution base the percentages were applied to.
    pub fn ibc(&self) -> Decimal {
        self.ibc
    }

    pub fn health_tax(&self) -> Decimal {
        self.health_tax
    }

    pub fn retirement_savings_tax(&self) -> Decimal {
        self.retirement_savings_tax
    }

    pub fn professional_risks_tax(&self) -> Decimal {
        self.professional_risks_tax
    }

    /// Health + retirement savings + professional risks.
    pub fn social_security_total(&self) -> Decimal {
        self.social_security_total
    }

    pub fn suggested_monthly_income_tax(&self) -> Decimal {
        self.suggested_monthly_income_tax
    }

    /// Social security total + suggested monthly income tax.
    pub fn parafiscals_total(&self) -> Decimal {
        self.parafiscals_total
    }
}

/// Complete breakdown for an independent worker's salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndependentSalaryOutput {
    income_calculation: IncomeCalculationSection,
    parafiscals: ParafiscalsSection,
    #[serde(with = "rust_decimal::serde::float")]
    net_income: Decimal,
}

impl IndependentSalaryOutput {
    pub(crate) fn new(
        income_calculation: IncomeCalculationSection,
        parafiscals: ParafiscalsSection,
    ) -> Self {
        let net_income = income_calculation.monthly.salary_in_local() - parafiscals.parafiscals_total;
        Self {
            income_calculation,
            parafiscals,
            net_income,
        }
    }

    pub fn income_calculation(&self) -> &IncomeCalculationSection {
        &self.income_calculation
    }

    pub fn parafiscals(&self) -> &ParafiscalsSection {
        &self.parafiscals
    }

    /// Monthly local salary minus all parafiscal charges.
    pub fn net_income(&self) -> Decimal {
        self.net_income
    }
}

impl fmt::Display for IndependentSalaryOutput {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let income = &self.income_calculation;
        let p = &self.parafiscals;

        writeln!(f, "Income")?;
        writeln!(
            f,
            "  Monthly:  {:>18} FX  {:>18} local",
            income.monthly.salary_in_fx(),
            income.monthly.salary_in_local()
        )?;
        writeln!(
            f,
            "  Annual:   {:>18} FX  {:>18} local",
            income.annual.salary_in_fx(),
            income.annual.salary_in_local()
        )?;
        writeln!(f, "Parafiscals")?;
        writeln!(f, "  IBC:                     {:>18}", p.ibc)?;
        writeln!(f, "  Health:                  {:>18}", p.health_tax)?;
        writeln!(f, "  Retirement savings:      {:>18}", p.retirement_savings_tax)?;
        writeln!(f, "  Professional risks:      {:>18}", p.professional_risks_tax)?;
        writeln!(f, "  Social security total:   {:>18}", p.social_security_total)?;
        writeln!(f, "  Suggested income tax:    {:>18}", p.suggested_monthly_income_tax)?;
        writeln!(f, "  Parafiscals total:       {:>18}", p.parafiscals_total)?;
        write!(f, "Net monthly income:         {:>18}", self.net_income)
    }
}
