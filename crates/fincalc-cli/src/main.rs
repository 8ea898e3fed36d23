mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::calculate::CalculateArgs;
use commands::deposits::{FixedDepositArgs, PpfArgs, RecurringDepositArgs};
use commands::investments::SipArgs;
use commands::loans::{LoanAdvancedArgs, LoanBasicArgs};

/// Loan, deposit, PPF and SIP calculators for Indian retail instruments
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Loan, deposit, PPF and SIP calculators",
    long_about = "A CLI for Indian retail savings and loan calculations with decimal \
                  precision. Supports flat and amortized loan EMIs, fixed and recurring \
                  deposits, Public Provident Fund projections and SIP future values."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// TOML file overriding scheme defaults (PPF rate, loan processing fee)
    #[arg(long, env = "FINCALC_CONFIG", global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flat-rate loan: simple interest spread evenly over the tenure
    LoanBasic(LoanBasicArgs),
    /// Amortizing loan EMI with processing fee
    LoanAdvanced(LoanAdvancedArgs),
    /// Fixed deposit maturity (cumulative or non-cumulative)
    FixedDeposit(FixedDepositArgs),
    /// Recurring deposit maturity
    RecurringDeposit(RecurringDepositArgs),
    /// Public Provident Fund projection
    Ppf(PpfArgs),
    /// Systematic Investment Plan future value with yearly breakdown
    Sip(SipArgs),
    /// Run any calculation from a tagged JSON request
    Calculate(CalculateArgs),
    /// List supported instruments
    Instruments,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let calc_config = match config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };
    debug!(?calc_config, "configuration loaded");

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::LoanBasic(args) => commands::loans::run_loan_basic(args),
        Commands::LoanAdvanced(args) => commands::loans::run_loan_advanced(args, &calc_config),
        Commands::FixedDeposit(args) => commands::deposits::run_fixed_deposit(args),
        Commands::RecurringDeposit(args) => commands::deposits::run_recurring_deposit(args),
        Commands::Ppf(args) => commands::deposits::run_ppf(args, &calc_config),
        Commands::Sip(args) => commands::investments::run_sip(args),
        Commands::Calculate(args) => commands::calculate::run_calculate(args, &calc_config),
        Commands::Instruments => commands::calculate::run_instruments(),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
