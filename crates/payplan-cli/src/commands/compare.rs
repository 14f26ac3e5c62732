use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use payplan_core::payoff::comparison::{compare_strategies, ComparisonInput};

use crate::commands::resolve_start_date;
use crate::input;

/// Arguments for an avalanche vs snowball comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a JSON or YAML file holding the debt snapshot
    #[arg(long)]
    pub input: Option<String>,

    /// Extra amount paid every month on top of the minimums
    #[arg(long, default_value = "0")]
    pub extra: Decimal,

    /// Simulation start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let debts = input::load_debts(args.input.as_deref())?;

    let comparison_input = ComparisonInput {
        debts,
        extra_payment: args.extra,
        start_date: resolve_start_date(args.start_date),
    };

    let result = compare_strategies(&comparison_input)?;
    Ok(serde_json::to_value(result)?)
}
