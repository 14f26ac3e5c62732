use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PayplanError;
use crate::payoff::simulator::{self, Debt, PayoffStrategy};
use crate::types::{with_metadata, EngineOutput, Money};
use crate::PayplanResult;

/// Bounded work guard, in the same spirit as the simulation horizon.
const MAX_SWEEP_POINTS: usize = 500;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Inclusive sweep over the monthly extra payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraPaymentRange {
    pub min: Money,
    pub max: Money,
    pub step: Money,
}

/// Input for an extra-payment sensitivity sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityInput {
    pub debts: Vec<Debt>,
    pub strategy: PayoffStrategy,
    pub start_date: NaiveDate,
    pub range: ExtraPaymentRange,
}

/// Projection headline at one extra-payment level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityRow {
    pub extra_payment: Money,
    pub months_to_payoff: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_free_date: Option<NaiveDate>,
    pub total_interest_paid: Money,
    /// Interest avoided relative to the `range.min` row.
    pub interest_saved_vs_min: Money,
}

/// Full sweep output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraPaymentSensitivity {
    pub strategy: PayoffStrategy,
    pub rows: Vec<SensitivityRow>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project the payoff once per extra-payment step across `[min, max]`.
pub fn sweep_extra_payment(
    input: &SensitivityInput,
) -> PayplanResult<EngineOutput<ExtraPaymentSensitivity>> {
    let start = Instant::now();

    simulator::validate_debts(&input.debts)?;
    let sweep = sweep_values(&input.range)?;

    let mut warnings: Vec<String> = Vec::new();
    let mut rows: Vec<SensitivityRow> = Vec::with_capacity(sweep.len());
    let mut base_interest: Option<Decimal> = None;

    for extra in sweep {
        let (projection, run_warnings) =
            simulator::simulate(&input.debts, extra, input.strategy, input.start_date)?;

        // The baseline run carries the portfolio-level warnings; later rows
        // only add anything new (a non-converging min row usually converges
        // once the extra payment grows).
        for warning in run_warnings {
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
        }

        let base = *base_interest.get_or_insert(projection.total_interest_paid);
        rows.push(SensitivityRow {
            extra_payment: extra,
            months_to_payoff: projection.months_to_payoff,
            debt_free_date: projection.debt_free_date,
            total_interest_paid: projection.total_interest_paid,
            interest_saved_vs_min: base - projection.total_interest_paid,
        });
    }

    let output = ExtraPaymentSensitivity {
        strategy: input.strategy,
        rows,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Extra-payment sensitivity (one payoff projection per step)",
        &serde_json::json!({
            "strategy": input.strategy,
            "start_date": input.start_date,
            "debt_count": input.debts.len(),
            "range": {
                "min": input.range.min.to_string(),
                "max": input.range.max.to_string(),
                "step": input.range.step.to_string(),
            },
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn sweep_values(range: &ExtraPaymentRange) -> PayplanResult<Vec<Decimal>> {
    if range.min < Decimal::ZERO {
        return Err(PayplanError::InvalidInput {
            field: "range.min".into(),
            reason: "sweep minimum must be >= 0".into(),
        });
    }
    if range.step <= Decimal::ZERO {
        return Err(PayplanError::InvalidInput {
            field: "range.step".into(),
            reason: "sweep step must be > 0".into(),
        });
    }
    if range.min > range.max {
        return Err(PayplanError::InvalidInput {
            field: "range.min".into(),
            reason: "sweep minimum must be <= maximum".into(),
        });
    }

    let mut values = Vec::new();
    let mut current = range.min;
    while current <= range.max {
        if values.len() == MAX_SWEEP_POINTS {
            return Err(PayplanError::InvalidInput {
                field: "range.step".into(),
                reason: format!("sweep exceeds {MAX_SWEEP_POINTS} points"),
            });
        }
        values.push(current);
        current += range.step;
    }

    Ok(values)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
