use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use payplan_core::payoff::simulator::{calculate_payoff, PayoffInput};

use crate::commands::{resolve_start_date, StrategyArg};
use crate::input;

/// Arguments for a payoff projection
#[derive(Args)]
pub struct PayoffArgs {
    /// Path to a JSON or YAML file holding the debt snapshot
    #[arg(long)]
    pub input: Option<String>,

    /// Extra amount paid every month on top of the minimums
    #[arg(long, default_value = "0")]
    pub extra: Decimal,

    /// Repayment strategy
    #[arg(long, value_enum, default_value = "avalanche")]
    pub strategy: StrategyArg,

    /// Simulation start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_payoff(args: PayoffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let debts = input::load_debts(args.input.as_deref())?;

    let payoff_input = PayoffInput {
        debts,
        extra_payment: args.extra,
        strategy: args.strategy.into(),
        start_date: resolve_start_date(args.start_date),
    };

    let result = calculate_payoff(&payoff_input)?;
    Ok(serde_json::to_value(result)?)
}
