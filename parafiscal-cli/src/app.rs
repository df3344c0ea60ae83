//! Rate loading and report rendering for the `parafiscal` binary.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use parafiscal_core::{IndependentSalaryOutput, ParafiscalRates};
use parafiscal_data::{IncomeTaxBracketLoader, RatesConfig};
use tracing::{debug, info};

/// How the calculation result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sectioned report.
    #[default]
    Text,
    /// The breakdown as JSON with its original field names.
    Json,
}

/// Builds the rate set for a run.
///
/// Uses the TOML file at `config` when given, otherwise the bundled rate
/// set. A bracket CSV at `brackets` replaces the configured income tax
/// schedule.
pub fn load_rates(
    config: Option<&Path>,
    brackets: Option<&Path>,
) -> Result<ParafiscalRates> {
    let rates = match config {
        Some(path) => RatesConfig::load(path)
            .with_context(|| format!("Failed to load rate set: {}", path.display()))?,
        None => {
            debug!("no rate file given; using bundled rate set");
            RatesConfig::bundled().context("Bundled rate set is invalid")?
        }
    };

    let Some(path) = brackets else {
        return Ok(rates);
    };

    let file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let records = IncomeTaxBracketLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
    info!(
        "loaded {} income tax brackets from {}",
        records.len(),
        path.display()
    );

    RatesConfig::with_brackets(rates, records)
        .with_context(|| format!("Invalid income tax brackets in: {}", path.display()))
}

/// Renders `output` in the requested format.
pub fn render(
    output: &IndependentSalaryOutput,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(output.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(output).context("Failed to serialize result")
        }
    }
}
