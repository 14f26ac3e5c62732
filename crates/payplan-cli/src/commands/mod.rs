pub mod compare;
pub mod payoff;
pub mod sensitivity;

use clap::ValueEnum;
use payplan_core::payoff::simulator::PayoffStrategy;

/// CLI-facing strategy flag, mapped onto the core enum.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Avalanche,
    Snowball,
}

impl From<StrategyArg> for PayoffStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Avalanche => PayoffStrategy::Avalanche,
            StrategyArg::Snowball => PayoffStrategy::Snowball,
        }
    }
}

/// Start date for a projection: the flag value when given, today otherwise.
/// The core never reads the clock; the default is resolved here.
pub fn resolve_start_date(flag: Option<chrono::NaiveDate>) -> chrono::NaiveDate {
    flag.unwrap_or_else(|| chrono::Local::now().date_naive())
}
