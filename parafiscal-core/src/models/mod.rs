mod gross_income;
mod income_tax_bracket;
mod parafiscal_rates;
mod risk_levels;
mod salary_input;
mod salary_output;

pub use gross_income::GrossIncome;
pub use income_tax_bracket::{IncomeTaxBase, IncomeTaxBracket};
pub use parafiscal_rates::ParafiscalRates;
pub use risk_levels::{RiskLevelRate, RiskLevels};
pub use salary_input::{SalaryInput, SalaryPeriod};
pub use salary_output::{IncomeCalculationSection, IndependentSalaryOutput, ParafiscalsSection};
