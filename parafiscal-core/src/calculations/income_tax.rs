//! Progressive income tax schedule evaluation.
//!
//! A schedule is a list of [`IncomeTaxBracket`]s in strictly ascending
//! threshold order. Each bracket's rate applies only to the slice of income
//! between its threshold and the next bracket's threshold; the last bracket
//! is open-ended and income below the first threshold is untaxed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use parafiscal_core::{IncomeTaxBracket, ProgressiveTaxSchedule};
//!
//! let brackets = vec![
//!     IncomeTaxBracket::new(dec!(0), dec!(0)),
//!     IncomeTaxBracket::new(dec!(4730905), dec!(0.19)),
//!     IncomeTaxBracket::new(dec!(7469850), dec!(0.28)),
//! ];
//!
//! let schedule = ProgressiveTaxSchedule::new(&brackets).unwrap();
//!
//! // (7,469,850 - 4,730,905) × 19% + (10,000,000 - 7,469,850) × 28%
//! assert_eq!(schedule.tax_for(dec!(10000000)), dec!(1228841.55));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{is_fraction, round_half_up};
use crate::{ConfigurationError, IncomeTaxBracket};

/// Checks that a bracket sequence is usable as a progressive schedule.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if:
/// - the sequence is empty
/// - a threshold is negative
/// - thresholds are not strictly ascending
/// - a rate is outside `[0, 1]`
pub fn validate_brackets(brackets: &[IncomeTaxBracket]) -> Result<(), ConfigurationError> {
    if brackets.is_empty() {
        return Err(ConfigurationError::NoIncomeTaxBrackets);
    }

    let mut previous: Option<Decimal> = None;
    for bracket in brackets {
        if bracket.threshold < Decimal::ZERO {
            return Err(ConfigurationError::NegativeBracketThreshold(
                bracket.threshold,
            ));
        }
        if let Some(previous) = previous {
            if bracket.threshold <= previous {
                return Err(ConfigurationError::UnorderedBracketThresholds {
                    previous,
                    next: bracket.threshold,
                });
            }
        }
        if !is_fraction(bracket.rate) {
            return Err(ConfigurationError::InvalidBracketRate {
                threshold: bracket.threshold,
                rate: bracket.rate,
            });
        }
        previous = Some(bracket.threshold);
    }

    Ok(())
}

/// A validated progressive schedule borrowed from a rate set.
#[derive(Debug, Clone, Copy)]
pub struct ProgressiveTaxSchedule<'a> {
    brackets: &'a [IncomeTaxBracket],
}

impl<'a> ProgressiveTaxSchedule<'a> {
    /// Validates `brackets` and wraps them as a schedule.
    ///
    /// # Errors
    ///
    /// See [`validate_brackets`].
    pub fn new(brackets: &'a [IncomeTaxBracket]) -> Result<Self, ConfigurationError> {
        validate_brackets(brackets)?;
        Ok(Self { brackets })
    }

    /// Computes the tax owed on `income` under marginal-bracket semantics,
    /// rounded half-up to cents. Zero or negative income owes nothing.
    pub fn tax_for(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if income <= bracket.threshold {
                break;
            }
            let upper = self
                .brackets
                .get(index + 1)
                .map_or(income, |next| income.min(next.threshold));
            tax += (upper - bracket.threshold) * bracket.rate;
        }

        round_half_up(tax)
    }

    pub fn brackets(&self) -> &'a [IncomeTaxBracket] {
        self.brackets
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_brackets() -> Vec<IncomeTaxBracket> {
        vec![
            IncomeTaxBracket::new(dec!(0), dec!(0)),
            IncomeTaxBracket::new(dec!(1000), dec!(0.10)),
            IncomeTaxBracket::new(dec!(2000), dec!(0.20)),
        ]
    }

    // =========================================================================
    // validate_brackets tests
    // =========================================================================

    #[test]
    fn validate_accepts_single_zero_bracket() {
        let brackets = vec![IncomeTaxBracket::new(dec!(0), dec!(0))];

        assert_eq!(validate_brackets(&brackets), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_sequence() {
        assert_eq!(
            validate_brackets(&[]),
            Err(ConfigurationError::NoIncomeTaxBrackets)
        );
    }

    #[test]
    fn validate_rejects_repeated_threshold() {
        let brackets = vec![
            IncomeTaxBracket::new(dec!(0), dec!(0)),
            IncomeTaxBracket::new(dec!(1000), dec!(0.10)),
            IncomeTaxBracket::new(dec!(1000), dec!(0.20)),
        ];

        assert_eq!(
            validate_brackets(&brackets),
            Err(ConfigurationError::UnorderedBracketThresholds {
                previous: dec!(1000),
                next: dec!(1000)
            })
        );
    }

    #[test]
    fn validate_rejects_descending_threshold() {
        let brackets = vec![
            IncomeTaxBracket::new(dec!(2000), dec!(0.20)),
            IncomeTaxBracket::new(dec!(1000), dec!(0.10)),
        ];

        assert_eq!(
            validate_brackets(&brackets),
            Err(ConfigurationError::UnorderedBracketThresholds {
                previous: dec!(2000),
                next: dec!(1000)
            })
        );
    }

    #[test]
    fn validate_rejects_negative_threshold() {
        let brackets = vec![IncomeTaxBracket::new(dec!(-1), dec!(0))];

        assert_eq!(
            validate_brackets(&brackets),
            Err(ConfigurationError::NegativeBracketThreshold(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let brackets = vec![IncomeTaxBracket::new(dec!(0), dec!(-0.05))];

        assert_eq!(
            validate_brackets(&brackets),
            Err(ConfigurationError::InvalidBracketRate {
                threshold: dec!(0),
                rate: dec!(-0.05)
            })
        );
    }

    // =========================================================================
    // tax_for tests
    // =========================================================================

    #[test]
    fn tax_for_zero_income_is_zero() {
        let brackets = test_brackets();
        let schedule = ProgressiveTaxSchedule::new(&brackets).unwrap();

        assert_eq!(schedule.tax_for(dec!(0)), dec!(0));
    }

    #[test]
    fn tax_for_negative_income_is_zero() {
        let brackets = test_brackets();
        let schedule = ProgressiveTaxSchedule::new(&brackets).unwrap();

        assert_eq!(schedule.tax_for(dec!(-500)), dec!(0));
    }

    #[test]
    fn tax_for_income_on_threshold_owes_nothing_in_next_bracket() {
        let brackets = test_brackets();
        let schedule = ProgressiveTaxSchedule::new(&brackets).unwrap();

        assert_eq!(schedule.tax_for(dec!(1000)), dec!(0));
    }

    #[test]
    fn tax_for_income_inside_second_bracket() {
        let brackets = test_brackets();
        let schedule = ProgressiveTaxSchedule::new(&brackets).unwrap();

        // (1500 - 1000) × 10%
        assert_eq!(schedule.tax_for(dec!(1500)), dec!(50));
    }

    #[test]
    fn tax_for_income_in_open_top_bracket() {
        let brackets = test_brackets();
        let schedule = ProgressiveTaxSchedule::new(&brackets).unwrap();

        // (2000 - 1000) × 10% + (2500 - 2000) × 20%
        assert_eq!(schedule.tax_for(dec!(2500)), dec!(200));
    }

    #[test]
    fn tax_for_income_below_first_threshold_is_untaxed() {
        let brackets = vec![IncomeTaxBracket::new(dec!(500), dec!(0.10))];
        let schedule = ProgressiveTaxSchedule::new(&brackets).unwrap();

        assert_eq!(schedule.tax_for(dec!(300)), dec!(0));
        assert_eq!(schedule.tax_for(dec!(800)), dec!(30));
    }

    #[test]
    fn tax_for_rounds_to_cents() {
        let brackets = vec![IncomeTaxBracket::new(dec!(0), dec!(0.19))];
        let schedule = ProgressiveTaxSchedule::new(&brackets).unwrap();

        // 0.19 × 0.25 = 0.0475
        assert_eq!(schedule.tax_for(dec!(0.25)), dec!(0.05));
    }

    #[test]
    fn tax_for_zero_rate_schedule_is_zero() {
        let brackets = vec![IncomeTaxBracket::new(dec!(0), dec!(0))];
        let schedule = ProgressiveTaxSchedule::new(&brackets).unwrap();

        assert_eq!(schedule.tax_for(dec!(2839120)), dec!(0));
    }
}
