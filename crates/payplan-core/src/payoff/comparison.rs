use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PayplanError;
use crate::payoff::simulator::{self, Debt, PayoffStrategy};
use crate::types::{with_metadata, EngineOutput, Money};
use crate::PayplanResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for a side-by-side avalanche/snowball comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub debts: Vec<Debt>,
    pub extra_payment: Money,
    pub start_date: NaiveDate,
}

/// One strategy's headline numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: PayoffStrategy,
    pub months_to_payoff: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_free_date: Option<NaiveDate>,
    pub total_interest_paid: Money,
    pub total_paid: Money,
    /// Name of the debt the surplus targets in month 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_target: Option<String>,
}

/// Both strategies on identical inputs, plus the delta between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: StrategySummary,
    pub snowball: StrategySummary,
    /// Snowball interest minus avalanche interest; never negative in theory,
    /// zero when every debt carries the same rate.
    pub interest_saved_by_avalanche: Money,
    /// Snowball months minus avalanche months, when both plans converge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_difference: Option<i64>,
    pub recommended: PayoffStrategy,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Run the payoff simulation under both strategies and report the trade-off.
pub fn compare_strategies(
    input: &ComparisonInput,
) -> PayplanResult<EngineOutput<StrategyComparison>> {
    let start = Instant::now();

    simulator::validate_debts(&input.debts)?;
    if input.extra_payment < Decimal::ZERO {
        return Err(PayplanError::InvalidInput {
            field: "extra_payment".into(),
            reason: "extra payment must be >= 0".into(),
        });
    }

    let mut warnings: Vec<String> = Vec::new();
    let mut summarize = |strategy: PayoffStrategy| -> PayplanResult<StrategySummary> {
        let (projection, run_warnings) = simulator::simulate(
            &input.debts,
            input.extra_payment,
            strategy,
            input.start_date,
        )?;
        // Both runs share the same portfolio, so debt-level warnings repeat.
        for warning in run_warnings {
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
        }
        Ok(StrategySummary {
            strategy,
            months_to_payoff: projection.months_to_payoff,
            debt_free_date: projection.debt_free_date,
            total_interest_paid: projection.total_interest_paid,
            total_paid: projection.total_paid,
            first_target: simulator::first_target(&input.debts, strategy),
        })
    };

    let avalanche = summarize(PayoffStrategy::Avalanche)?;
    let snowball = summarize(PayoffStrategy::Snowball)?;

    let interest_saved = snowball.total_interest_paid - avalanche.total_interest_paid;
    let months_difference = match (avalanche.months_to_payoff, snowball.months_to_payoff) {
        (Some(a), Some(s)) => Some(i64::from(s) - i64::from(a)),
        _ => None,
    };

    let recommended = match (avalanche.months_to_payoff, snowball.months_to_payoff) {
        (Some(_), None) => PayoffStrategy::Avalanche,
        (None, Some(_)) => PayoffStrategy::Snowball,
        // Equal-rate portfolios tie on interest; snowball's early payoffs
        // break the tie.
        _ if interest_saved > Decimal::ZERO => PayoffStrategy::Avalanche,
        _ => PayoffStrategy::Snowball,
    };

    let comparison = StrategyComparison {
        avalanche,
        snowball,
        interest_saved_by_avalanche: interest_saved,
        months_difference,
        recommended,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Avalanche vs snowball comparison (two independent payoff projections)",
        &serde_json::json!({
            "extra_payment": input.extra_payment.to_string(),
            "start_date": input.start_date,
            "debt_count": input.debts.len(),
        }),
        warnings,
        elapsed,
        comparison,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
