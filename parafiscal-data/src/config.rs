//! Rate set configuration files.
//!
//! A rate set is stored as TOML:
//!
//! ```toml
//! health_rate = 0.125
//! retirement_rate = 0.16
//! income_tax_base = "ibc_less_social_security"   # or "ibc"
//! ibc_percentage = 0.4                           # optional, defaults to 1
//! ibc_floor = 1423500                            # optional
//! ibc_ceiling = 35587500                         # optional
//!
//! [[risk_levels]]
//! level = 1
//! rate = 0.00522
//!
//! [[income_tax_brackets]]
//! threshold = 0
//! rate = 0
//! ```
//!
//! Every loaded rate set is validated before it is returned.

use std::fs;
use std::path::{Path, PathBuf};

use parafiscal_core::{ConfigurationError, IncomeTaxBracket, ParafiscalRates};
use thiserror::Error;
use tracing::{debug, info};

const BUNDLED_RATES: &str = include_str!("../config/colombia_independent.toml");

/// Errors that can occur when loading a rate set.
#[derive(Debug, Error)]
pub enum RatesConfigError {
    #[error("cannot read rate file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid rate set: {0}")]
    Invalid(#[from] ConfigurationError),
}

/// Loader for [`ParafiscalRates`] from TOML.
pub struct RatesConfig;

impl RatesConfig {
    /// Parse and validate a rate set from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<ParafiscalRates, RatesConfigError> {
        let rates: ParafiscalRates = toml::from_str(source)?;
        rates.validate()?;
        debug!(
            risk_levels = rates.risk_levels.len(),
            brackets = rates.income_tax_brackets.len(),
            "parsed rate set"
        );
        Ok(rates)
    }

    /// Read, parse and validate a rate set from `path`.
    pub fn load(path: &Path) -> Result<ParafiscalRates, RatesConfigError> {
        let source = fs::read_to_string(path).map_err(|source| RatesConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rates = Self::from_toml_str(&source)?;
        info!("loaded rate set from {}", path.display());
        Ok(rates)
    }

    /// The rate set shipped with the crate (Colombian independent worker,
    /// 2025).
    pub fn bundled() -> Result<ParafiscalRates, RatesConfigError> {
        Self::from_toml_str(BUNDLED_RATES)
    }

    /// Replaces the income tax schedule of `rates` and re-validates the
    /// result.
    pub fn with_brackets(
        mut rates: ParafiscalRates,
        brackets: Vec<IncomeTaxBracket>,
    ) -> Result<ParafiscalRates, RatesConfigError> {
        rates.income_tax_brackets = brackets;
        rates.validate()?;
        Ok(rates)
    }
}

#[cfg(test)]
mod tests {
    use parafiscal_core::IncomeTaxBase;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MINIMAL_TOML: &str = r#"
health_rate = 0.125
retirement_rate = 0.16

[[risk_levels]]
level = 1
rate = 0.00522

[[income_tax_brackets]]
threshold = 0
rate = 0
"#;

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let rates = RatesConfig::from_toml_str(MINIMAL_TOML).expect("valid rate set");

        assert_eq!(rates.health_rate, dec!(0.125));
        assert_eq!(rates.retirement_rate, dec!(0.16));
        assert_eq!(rates.risk_levels.rate(1), Some(dec!(0.00522)));
        assert_eq!(rates.income_tax_base, IncomeTaxBase::IbcLessSocialSecurity);
        assert_eq!(rates.ibc_percentage, dec!(1));
        assert_eq!(rates.ibc_floor, None);
        assert_eq!(rates.ibc_ceiling, None);
    }

    #[test]
    fn test_bundled_rates_are_valid() {
        let rates = RatesConfig::bundled().expect("bundled rate set");

        assert_eq!(rates.risk_levels.levels().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(rates.risk_levels.rate(5), Some(dec!(0.0696)));
        assert_eq!(rates.income_tax_brackets.len(), 7);
        assert_eq!(rates.ibc_percentage, dec!(0.4));
        assert_eq!(rates.ibc_floor, Some(dec!(1423500)));
        assert_eq!(rates.ibc_ceiling, Some(dec!(35587500)));
    }

    #[test]
    fn test_income_tax_base_parses_snake_case() {
        let toml = format!("income_tax_base = \"ibc\"\n{MINIMAL_TOML}");

        let rates = RatesConfig::from_toml_str(&toml).expect("valid rate set");

        assert_eq!(rates.income_tax_base, IncomeTaxBase::Ibc);
    }

    #[test]
    fn test_out_of_range_rate_is_invalid() {
        let toml = MINIMAL_TOML.replace("health_rate = 0.125", "health_rate = 12.5");

        let result = RatesConfig::from_toml_str(&toml);

        match result {
            Err(RatesConfigError::Invalid(ConfigurationError::InvalidHealthRate(rate))) => {
                assert_eq!(rate, dec!(12.5));
            }
            other => panic!("expected InvalidHealthRate, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_risk_level_is_rejected_while_parsing() {
        let toml = MINIMAL_TOML.replace(
            "rate = 0.00522\n",
            "rate = 0.00522\n\n[[risk_levels]]\nlevel = 1\nrate = 0.01\n",
        );

        let result = RatesConfig::from_toml_str(&toml);

        let err = result.expect_err("duplicate level should fail");
        assert!(
            err.to_string().contains("configured more than once"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_missing_field_is_toml_error() {
        let result = RatesConfig::from_toml_str("health_rate = 0.125");

        assert!(
            matches!(result, Err(RatesConfigError::Toml(_))),
            "expected Toml error, got {result:?}"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = RatesConfig::load(Path::new("does/not/exist.toml"));

        match result {
            Err(RatesConfigError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("does/not/exist.toml"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_brackets_revalidates() {
        let rates = RatesConfig::from_toml_str(MINIMAL_TOML).unwrap();
        let unordered = vec![
            IncomeTaxBracket::new(dec!(100), dec!(0.1)),
            IncomeTaxBracket::new(dec!(50), dec!(0.2)),
        ];

        let result = RatesConfig::with_brackets(rates, unordered);

        assert!(matches!(
            result,
            Err(RatesConfigError::Invalid(
                ConfigurationError::UnorderedBracketThresholds { .. }
            ))
        ));
    }
}
