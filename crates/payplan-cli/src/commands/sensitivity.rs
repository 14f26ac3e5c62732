use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use payplan_core::payoff::sensitivity::{
    sweep_extra_payment, ExtraPaymentRange, SensitivityInput,
};

use crate::commands::{resolve_start_date, StrategyArg};
use crate::input;

/// Arguments for an extra-payment sensitivity sweep
#[derive(Args)]
pub struct SensitivityArgs {
    /// Path to a JSON or YAML file holding the debt snapshot
    #[arg(long)]
    pub input: Option<String>,

    /// Repayment strategy
    #[arg(long, value_enum, default_value = "avalanche")]
    pub strategy: StrategyArg,

    /// Lowest extra payment in the sweep
    #[arg(long, default_value = "0")]
    pub min: Decimal,

    /// Highest extra payment in the sweep
    #[arg(long)]
    pub max: Option<Decimal>,

    /// Sweep step
    #[arg(long, default_value = "50")]
    pub step: Decimal,

    /// Simulation start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_sensitivity(args: SensitivityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let debts = input::load_debts(args.input.as_deref())?;
    let max = args.max.ok_or("--max is required")?;

    let sensitivity_input = SensitivityInput {
        debts,
        strategy: args.strategy.into(),
        start_date: resolve_start_date(args.start_date),
        range: ExtraPaymentRange {
            min: args.min,
            max,
            step: args.step,
        },
    };

    let result = sweep_extra_payment(&sensitivity_input)?;
    Ok(serde_json::to_value(result)?)
}
