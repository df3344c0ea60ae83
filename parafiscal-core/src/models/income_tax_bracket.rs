use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of a progressive income tax schedule.
///
/// The bracket covers income from `threshold` up to the next bracket's
/// threshold; the last bracket is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBracket {
    /// Lower bound of the bracket, in local currency.
    pub threshold: Decimal,
    /// Marginal rate applied to income inside the bracket, as a fraction.
    pub rate: Decimal,
}

impl IncomeTaxBracket {
    pub fn new(
        threshold: Decimal,
        rate: Decimal,
    ) -> Self {
        Self { threshold, rate }
    }
}

/// The figure the income tax brackets are applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeTaxBase {
    /// The contribution base as is.
    Ibc,
    /// The contribution base minus the social security total, floored at zero.
    #[default]
    IbcLessSocialSecurity,
}
