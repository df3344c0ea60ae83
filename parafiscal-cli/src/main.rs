use std::path::PathBuf;

use clap::Parser;
use parafiscal_cli::app::{self, OutputFormat};
use parafiscal_cli::logging;
use parafiscal_core::{ParafiscalCalculator, SalaryInput, SalaryPeriod};
use rust_decimal::Decimal;
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Parafiscal contribution calculator for independent workers paid in
/// foreign currency.
///
/// Converts the salary to local currency and prints the income breakdown,
/// social security contributions, suggested income tax and net income.
#[derive(Debug, Parser)]
#[command(name = "parafiscal")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Salary in foreign currency (monthly unless --annual is given).
    #[arg(short, long)]
    salary: Decimal,

    /// Local currency units per unit of foreign currency.
    #[arg(short, long)]
    exchange_rate: Decimal,

    /// Professional-risk level code.
    #[arg(short, long, default_value_t = 1)]
    risk_level: u32,

    /// Treat --salary as an annual figure.
    #[arg(long, default_value_t = false)]
    annual: bool,

    /// TOML rate set; the bundled rate set is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV file of income tax brackets (threshold,rate) replacing the
    /// configured schedule.
    #[arg(short, long)]
    brackets: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_file.as_deref())?;

    let rates = app::load_rates(cli.config.as_deref(), cli.brackets.as_deref())?;
    let calculator = ParafiscalCalculator::new(&rates)?;

    let period = if cli.annual {
        SalaryPeriod::Annual
    } else {
        SalaryPeriod::Monthly
    };
    let input = SalaryInput {
        salary_in_fx: cli.salary,
        exchange_rate: cli.exchange_rate,
        risk_level: cli.risk_level,
        period,
    };

    debug!(?input, "running calculation");
    let output = calculator.calculate(&input)?;
    println!("{}", app::render(&output, cli.format)?);

    Ok(())
}
