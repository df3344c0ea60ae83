//! Parafiscal and income tax calculations.
//!
//! [`parafiscal`] turns a foreign-currency salary into the full contribution
//! breakdown; [`income_tax`] evaluates the progressive withholding schedule
//! it relies on.

pub mod common;
pub mod income_tax;
pub mod parafiscal;

pub use income_tax::ProgressiveTaxSchedule;
pub use parafiscal::{ParafiscalCalculator, compute};
