mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::payoff::PayoffArgs;
use commands::sensitivity::SensitivityArgs;

/// Debt payoff projections with decimal precision
#[derive(Parser)]
#[command(
    name = "payplan",
    version,
    about = "Debt payoff projections with decimal precision",
    long_about = "A CLI for projecting debt payoff month by month with decimal precision. \
                  Supports avalanche and snowball repayment strategies, side-by-side \
                  strategy comparison, and extra-payment sensitivity sweeps."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project month-by-month payoff of a debt portfolio
    Payoff(PayoffArgs),
    /// Compare avalanche vs snowball on the same portfolio
    Compare(CompareArgs),
    /// Sweep the extra monthly payment across a range
    Sensitivity(SensitivityArgs),
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

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payoff(args) => commands::payoff::run_payoff(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Sensitivity(args) => commands::sensitivity::run_sensitivity(args),
        Commands::Version => {
            println!("payplan {}", env!("CARGO_PKG_VERSION"));
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
