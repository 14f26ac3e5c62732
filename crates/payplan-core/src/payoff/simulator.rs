use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

use crate::error::PayplanError;
use crate::types::{with_metadata, Apr, EngineOutput, Money};
use crate::PayplanResult;

/// Hard ceiling on simulated months (50 years). A plan that has not retired
/// every balance by then is reported as non-converging, not an error.
pub const MAX_HORIZON_MONTHS: u32 = 600;

const PERCENT: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);
/// Reported amounts are rounded to the cent; internal arithmetic is not.
const CENTS: u32 = 2;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Repayment ordering for the shared surplus pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Highest interest rate first, minimising total interest paid.
    Avalanche,
    /// Smallest balance first, maximising early payoffs.
    Snowball,
}

/// A single liability in the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub current_balance: Money,
    /// Nominal APR in percent (18.5 = 18.5%/year). The monthly periodic
    /// rate used for accrual is `interest_rate / 100 / 12`.
    pub interest_rate: Apr,
    pub minimum_payment: Money,
    /// Day of month the payment is due (1-31). Informational only; never
    /// affects accrual or ordering.
    pub due_date: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Input for a payoff projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffInput {
    pub debts: Vec<Debt>,
    /// Constant additional amount available every month on top of minimums.
    pub extra_payment: Money,
    pub strategy: PayoffStrategy,
    /// The projection is anchored here; month N ends N months after this date.
    pub start_date: NaiveDate,
}

/// Aggregate state across all debts at the end of one simulated month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAmortization {
    /// 1-indexed month number.
    pub month: u32,
    /// Total remaining balance across all debts, end of month.
    pub balance: Money,
    pub interest_paid: Money,
    pub principal_paid: Money,
}

/// Per-debt outcome of the projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub id: String,
    pub name: String,
    pub starting_balance: Money,
    pub interest_paid: Money,
    /// Month the balance reached zero; `Some(0)` for debts that entered the
    /// plan already paid off, `None` if still owed at the horizon.
    pub payoff_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff_date: Option<NaiveDate>,
}

/// Full payoff projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffProjection {
    /// `None` means the plan does not pay off within the horizon.
    pub months_to_payoff: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_free_date: Option<NaiveDate>,
    pub total_interest_paid: Money,
    pub total_paid: Money,
    pub monthly_amortization: Vec<MonthlyAmortization>,
    pub per_debt: Vec<DebtPayoff>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub(crate) fn validate_debts(debts: &[Debt]) -> PayplanResult<()> {
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for (i, debt) in debts.iter().enumerate() {
        if debt.id.is_empty() {
            return Err(PayplanError::InvalidInput {
                field: format!("debts[{i}].id"),
                reason: "id must not be empty".into(),
            });
        }
        if !seen_ids.insert(debt.id.as_str()) {
            return Err(PayplanError::InvalidInput {
                field: format!("debts[{i}].id"),
                reason: format!("duplicate debt id '{}'", debt.id),
            });
        }
        if debt.current_balance < Decimal::ZERO {
            return Err(PayplanError::InvalidInput {
                field: format!("debts[{i}].current_balance"),
                reason: "balance must be >= 0".into(),
            });
        }
        if debt.interest_rate < Decimal::ZERO {
            return Err(PayplanError::InvalidInput {
                field: format!("debts[{i}].interest_rate"),
                reason: "APR must be >= 0".into(),
            });
        }
        if debt.minimum_payment < Decimal::ZERO {
            return Err(PayplanError::InvalidInput {
                field: format!("debts[{i}].minimum_payment"),
                reason: "minimum payment must be >= 0".into(),
            });
        }
        if debt.due_date < 1 || debt.due_date > 31 {
            return Err(PayplanError::InvalidInput {
                field: format!("debts[{i}].due_date"),
                reason: "due date must be a day of month between 1 and 31".into(),
            });
        }
    }

    Ok(())
}

fn validate(input: &PayoffInput) -> PayplanResult<()> {
    validate_debts(&input.debts)?;

    if input.extra_payment < Decimal::ZERO {
        return Err(PayplanError::InvalidInput {
            field: "extra_payment".into(),
            reason: "extra payment must be >= 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Working record for one debt. The caller's `Debt` is never mutated.
struct DebtState {
    balance: Decimal,
    monthly_rate: Decimal,
    minimum: Decimal,
    interest_accrued: Decimal,
    paid_off_month: Option<u32>,
}

/// The first debt the surplus pool would target in month 1, by name.
#[cfg(feature = "comparison")]
pub(crate) fn first_target(debts: &[Debt], strategy: PayoffStrategy) -> Option<String> {
    let mut active: Vec<&Debt> = debts
        .iter()
        .filter(|d| d.current_balance > Decimal::ZERO)
        .collect();
    match strategy {
        PayoffStrategy::Avalanche => {
            active.sort_by(|a, b| b.interest_rate.cmp(&a.interest_rate));
        }
        PayoffStrategy::Snowball => {
            active.sort_by(|a, b| a.current_balance.cmp(&b.current_balance));
        }
    }
    active.first().map(|d| d.name.clone())
}

/// Run the monthly allocation loop. Shared by the projection, comparison and
/// sensitivity entry points; callers have already validated the debts.
pub(crate) fn simulate(
    debts: &[Debt],
    extra_payment: Money,
    strategy: PayoffStrategy,
    start_date: NaiveDate,
) -> PayplanResult<(PayoffProjection, Vec<String>)> {
    let mut warnings: Vec<String> = Vec::new();

    let mut states: Vec<DebtState> = debts
        .iter()
        .map(|d| {
            let monthly_rate = d.interest_rate / PERCENT / MONTHS_PER_YEAR;
            DebtState {
                balance: d.current_balance,
                monthly_rate,
                minimum: d.minimum_payment,
                interest_accrued: Decimal::ZERO,
                paid_off_month: if d.current_balance > Decimal::ZERO {
                    None
                } else {
                    Some(0)
                },
            }
        })
        .collect();

    for (debt, state) in debts.iter().zip(&states) {
        if state.paid_off_month.is_none()
            && debt.minimum_payment < state.balance * state.monthly_rate
        {
            warnings.push(format!(
                "'{}': minimum payment {} does not cover first-month interest; \
                 balance will grow unless surplus reaches it",
                debt.name, debt.minimum_payment,
            ));
        }
    }

    // The monthly budget never shrinks: once a debt retires, its minimum
    // rolls over into the surplus for every later month. Debts that entered
    // the plan already at zero never contributed a minimum.
    let monthly_budget: Decimal = extra_payment
        + states
            .iter()
            .filter(|s| s.paid_off_month.is_none())
            .map(|s| s.minimum)
            .sum::<Decimal>();

    let mut schedule: Vec<MonthlyAmortization> = Vec::new();
    let mut total_interest = Decimal::ZERO;
    let mut total_paid = Decimal::ZERO;
    let mut months: u32 = 0;
    let mut converged = true;

    while states.iter().any(|s| s.balance > Decimal::ZERO) {
        if months == MAX_HORIZON_MONTHS {
            converged = false;
            break;
        }
        months += 1;

        // Strategy order over the active debts. Built in input order, then
        // stable-sorted, so ties keep their original position.
        let mut order: Vec<usize> = (0..states.len())
            .filter(|&i| states[i].balance > Decimal::ZERO)
            .collect();
        match strategy {
            PayoffStrategy::Avalanche => {
                order.sort_by(|&a, &b| states[b].monthly_rate.cmp(&states[a].monthly_rate));
            }
            PayoffStrategy::Snowball => {
                order.sort_by(|&a, &b| states[a].balance.cmp(&states[b].balance));
            }
        }

        // Accrue one month of interest on every active balance.
        let mut month_interest = Decimal::ZERO;
        for &i in &order {
            let interest = states[i].balance * states[i].monthly_rate;
            states[i].balance += interest;
            states[i].interest_accrued += interest;
            month_interest += interest;
        }

        let mut pool = monthly_budget;

        // Minimum payments in strategy order. A debt with less balance than
        // its minimum absorbs only the balance, leaving the rest in the pool.
        let mut month_paid = Decimal::ZERO;
        for &i in &order {
            let payment = states[i].minimum.min(states[i].balance);
            states[i].balance -= payment;
            pool -= payment;
            month_paid += payment;
        }

        // Surplus concentrates on the first debt in strategy order that still
        // owes, cascading to the next target only when one closes mid-month.
        for &i in &order {
            if pool <= Decimal::ZERO {
                break;
            }
            if states[i].balance <= Decimal::ZERO {
                continue;
            }
            let payment = states[i].balance.min(pool);
            states[i].balance -= payment;
            pool -= payment;
            month_paid += payment;
        }

        for state in states.iter_mut() {
            if state.balance <= Decimal::ZERO && state.paid_off_month.is_none() {
                state.paid_off_month = Some(months);
            }
        }

        total_interest += month_interest;
        total_paid += month_paid;

        let remaining: Decimal = states.iter().map(|s| s.balance).sum();
        schedule.push(MonthlyAmortization {
            month: months,
            balance: remaining.round_dp(CENTS),
            interest_paid: month_interest.round_dp(CENTS),
            principal_paid: (month_paid - month_interest).round_dp(CENTS),
        });
    }

    if !converged {
        let remaining: Decimal = states.iter().map(|s| s.balance).sum();
        warnings.push(format!(
            "plan does not pay off within the {MAX_HORIZON_MONTHS}-month horizon; \
             {} still owed",
            remaining.round_dp(CENTS),
        ));
    }

    let months_to_payoff = if converged { Some(months) } else { None };
    let debt_free_date = months_to_payoff
        .map(|m| add_months(start_date, m))
        .transpose()?;

    let per_debt = debts
        .iter()
        .zip(&states)
        .map(|(debt, state)| {
            let payoff_date = state
                .paid_off_month
                .map(|m| add_months(start_date, m))
                .transpose()?;
            Ok(DebtPayoff {
                id: debt.id.clone(),
                name: debt.name.clone(),
                starting_balance: debt.current_balance,
                interest_paid: state.interest_accrued.round_dp(CENTS),
                payoff_month: state.paid_off_month,
                payoff_date,
            })
        })
        .collect::<PayplanResult<Vec<_>>>()?;

    let projection = PayoffProjection {
        months_to_payoff,
        debt_free_date,
        total_interest_paid: total_interest.round_dp(CENTS),
        total_paid: total_paid.round_dp(CENTS),
        monthly_amortization: schedule,
        per_debt,
    };

    Ok((projection, warnings))
}

fn add_months(date: NaiveDate, months: u32) -> PayplanResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| PayplanError::DateError(format!("{date} + {months} months overflows")))
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project month-by-month payoff of a debt portfolio under a fixed strategy
/// and a constant extra monthly payment.
pub fn calculate_payoff(input: &PayoffInput) -> PayplanResult<EngineOutput<PayoffProjection>> {
    let start = Instant::now();

    validate(input)?;

    let (projection, warnings) = simulate(
        &input.debts,
        input.extra_payment,
        input.strategy,
        input.start_date,
    )?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Debt payoff projection (monthly amortization, strategy-ordered surplus allocation)",
        &serde_json::json!({
            "strategy": input.strategy,
            "extra_payment": input.extra_payment.to_string(),
            "start_date": input.start_date,
            "debt_count": input.debts.len(),
            "horizon_months": MAX_HORIZON_MONTHS,
        }),
        warnings,
        elapsed,
        projection,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn debt(id: &str, balance: Decimal, apr: Decimal, minimum: Decimal) -> Debt {
        Debt {
            id: id.to_string(),
            name: id.to_uppercase(),
            current_balance: balance,
            interest_rate: apr,
            minimum_payment: minimum,
            due_date: 15,
            category: None,
        }
    }

    fn input(debts: Vec<Debt>, extra: Decimal, strategy: PayoffStrategy) -> PayoffInput {
        PayoffInput {
            debts,
            extra_payment: extra,
            strategy,
            start_date: start(),
        }
    }

    fn payoff_month(projection: &PayoffProjection, id: &str) -> Option<u32> {
        projection
            .per_debt
            .iter()
            .find(|d| d.id == id)
            .and_then(|d| d.payoff_month)
    }

    // ---------------------------------------------------------------
    // 1. Empty portfolio is already debt-free
    // ---------------------------------------------------------------
    #[test]
    fn test_empty_portfolio() {
        let result = calculate_payoff(&input(vec![], dec!(100), PayoffStrategy::Avalanche))
            .unwrap();
        let p = &result.result;

        assert_eq!(p.months_to_payoff, Some(0));
        assert_eq!(p.debt_free_date, Some(start()));
        assert_eq!(p.total_interest_paid, Decimal::ZERO);
        assert!(p.monthly_amortization.is_empty());
        assert!(p.per_debt.is_empty());
    }

    // ---------------------------------------------------------------
    // 2. Zero interest, zero extra: pure division
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_interest_converges_exactly() {
        let debts = vec![debt("a", dec!(1200), dec!(0), dec!(100))];
        let result = calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Snowball)).unwrap();
        let p = &result.result;

        assert_eq!(p.months_to_payoff, Some(12));
        assert_eq!(p.total_interest_paid, Decimal::ZERO);
        assert_eq!(p.total_paid, dec!(1200));
        assert_eq!(p.monthly_amortization.len(), 12);
        assert_eq!(p.monthly_amortization[11].balance, Decimal::ZERO);
        assert_eq!(
            p.debt_free_date,
            Some(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap())
        );
    }

    // ---------------------------------------------------------------
    // 3. Single debt, 12% APR: first month is 1% interest
    // ---------------------------------------------------------------
    #[test]
    fn test_single_debt_first_month_accrual() {
        let debts = vec![debt("a", dec!(1000), dec!(12), dec!(100))];
        let result = calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Avalanche)).unwrap();
        let p = &result.result;

        let first = &p.monthly_amortization[0];
        assert_eq!(first.interest_paid, dec!(10.00));
        assert_eq!(first.principal_paid, dec!(90.00));
        assert_eq!(first.balance, dec!(910.00));

        // 1000 at 1%/month with 100/month retires in month 11
        assert_eq!(p.months_to_payoff, Some(11));
        assert!(p.total_interest_paid > dec!(58) && p.total_interest_paid < dec!(60));
    }

    // ---------------------------------------------------------------
    // 4. Avalanche retires the high-rate debt first
    // ---------------------------------------------------------------
    #[test]
    fn test_avalanche_targets_highest_rate() {
        let debts = vec![
            debt("a", dec!(1000), dec!(5), dec!(50)),
            debt("b", dec!(1000), dec!(20), dec!(50)),
        ];
        let result = calculate_payoff(&input(debts, dec!(100), PayoffStrategy::Avalanche)).unwrap();
        let p = &result.result;

        let b_month = payoff_month(p, "b").unwrap();
        let a_month = payoff_month(p, "a").unwrap();
        assert!(
            b_month < a_month,
            "high-rate debt should close first: b={b_month} a={a_month}"
        );
    }

    // ---------------------------------------------------------------
    // 5. Avalanche pays less total interest than snowball
    // ---------------------------------------------------------------
    #[test]
    fn test_avalanche_beats_snowball_on_interest() {
        let debts = vec![
            debt("a", dec!(1000), dec!(5), dec!(50)),
            debt("b", dec!(1000), dec!(20), dec!(50)),
        ];

        let avalanche =
            calculate_payoff(&input(debts.clone(), dec!(100), PayoffStrategy::Avalanche)).unwrap();
        let snowball =
            calculate_payoff(&input(debts, dec!(100), PayoffStrategy::Snowball)).unwrap();

        assert!(
            avalanche.result.total_interest_paid < snowball.result.total_interest_paid,
            "avalanche {} should beat snowball {}",
            avalanche.result.total_interest_paid,
            snowball.result.total_interest_paid,
        );
    }

    // ---------------------------------------------------------------
    // 6. Snowball tie-break: equal balances keep input order
    // ---------------------------------------------------------------
    #[test]
    fn test_snowball_tie_break_is_input_order() {
        let debts = vec![
            debt("a", dec!(1000), dec!(5), dec!(50)),
            debt("b", dec!(1000), dec!(20), dec!(50)),
        ];
        let result = calculate_payoff(&input(debts, dec!(100), PayoffStrategy::Snowball)).unwrap();
        let p = &result.result;

        // Both start at 1000, so the surplus lands on 'a' first and keeps it
        // the smaller balance from then on.
        let a_month = payoff_month(p, "a").unwrap();
        let b_month = payoff_month(p, "b").unwrap();
        assert!(a_month < b_month, "tie should target 'a': a={a_month} b={b_month}");
    }

    // ---------------------------------------------------------------
    // 7. Freed minimum joins the surplus in the same month
    // ---------------------------------------------------------------
    #[test]
    fn test_freed_minimum_reallocated_same_month() {
        // Zero rates keep the arithmetic exact. 'a' has 50 left in month 3,
        // so 50 of its minimum flows through to 'b' within that month.
        let debts = vec![
            debt("a", dec!(250), dec!(0), dec!(100)),
            debt("b", dec!(1000), dec!(0), dec!(100)),
        ];
        let result = calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Avalanche)).unwrap();
        let p = &result.result;

        assert_eq!(payoff_month(p, "a"), Some(3));
        // Month 3 still moves the full 200 pool: 50 to 'a', 150 to 'b'.
        assert_eq!(p.monthly_amortization[2].principal_paid, dec!(200));
        // Month 4 onward the freed 100 keeps flowing to 'b'.
        assert_eq!(p.monthly_amortization[3].principal_paid, dec!(200));
        assert_eq!(p.months_to_payoff, Some(7));
        assert_eq!(p.total_paid, dec!(1250));
    }

    // ---------------------------------------------------------------
    // 8. Surplus cascades past a target retired mid-month
    // ---------------------------------------------------------------
    #[test]
    fn test_surplus_cascades_to_next_target() {
        let debts = vec![
            debt("a", dec!(1000), dec!(5), dec!(50)),
            debt("b", dec!(40), dec!(20), dec!(10)),
        ];
        let result = calculate_payoff(&input(debts, dec!(500), PayoffStrategy::Avalanche)).unwrap();
        let p = &result.result;

        // 'b' absorbs a fraction of the 500 surplus in month 1; the rest must
        // land on 'a' the same month rather than evaporating.
        assert_eq!(payoff_month(p, "b"), Some(1));
        assert_eq!(payoff_month(p, "a"), Some(2));
        assert_eq!(p.months_to_payoff, Some(2));
    }

    // ---------------------------------------------------------------
    // 9. Negative amortization is reported, not clamped
    // ---------------------------------------------------------------
    #[test]
    fn test_negative_amortization_grows_balance() {
        // 2.5%/month accrues 250 against a 100 minimum.
        let debts = vec![debt("a", dec!(10000), dec!(30), dec!(100))];
        let result = calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Avalanche)).unwrap();
        let p = &result.result;

        let first = &p.monthly_amortization[0];
        assert_eq!(first.balance, dec!(10150.00));
        assert_eq!(first.interest_paid, dec!(250.00));
        assert_eq!(first.principal_paid, dec!(-150.00));

        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("does not cover first-month interest")));
    }

    // ---------------------------------------------------------------
    // 10. Non-convergence stops at the horizon
    // ---------------------------------------------------------------
    #[test]
    fn test_non_convergence_bounded_by_horizon() {
        let debts = vec![debt("a", dec!(10000), dec!(30), dec!(100))];
        let result = calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Snowball)).unwrap();
        let p = &result.result;

        assert_eq!(p.months_to_payoff, None);
        assert_eq!(p.debt_free_date, None);
        assert_eq!(p.monthly_amortization.len() as u32, MAX_HORIZON_MONTHS);
        assert_eq!(payoff_month(p, "a"), None);
        assert!(result.warnings.iter().any(|w| w.contains("horizon")));
    }

    // ---------------------------------------------------------------
    // 11. Determinism: identical inputs, identical projections
    // ---------------------------------------------------------------
    #[test]
    fn test_deterministic_across_calls() {
        let debts = vec![
            debt("a", dec!(3200), dec!(19.9), dec!(80)),
            debt("b", dec!(11500), dec!(6.4), dec!(240)),
        ];
        let run = || {
            calculate_payoff(&input(debts.clone(), dec!(150), PayoffStrategy::Avalanche)).unwrap()
        };

        let first = run();
        let second = run();
        assert_eq!(
            serde_json::to_value(&first.result).unwrap(),
            serde_json::to_value(&second.result).unwrap(),
        );
    }

    // ---------------------------------------------------------------
    // 12. Debts entering at zero balance never simulate
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_balance_debt_excluded() {
        let debts = vec![
            debt("done", dec!(0), dec!(22), dec!(35)),
            debt("b", dec!(500), dec!(0), dec!(100)),
        ];
        let result = calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Avalanche)).unwrap();
        let p = &result.result;

        // The retired debt's minimum never enters the pool.
        assert_eq!(p.months_to_payoff, Some(5));
        assert_eq!(payoff_month(p, "done"), Some(0));
        let done = p.per_debt.iter().find(|d| d.id == "done").unwrap();
        assert_eq!(done.payoff_date, Some(start()));
        assert_eq!(done.interest_paid, Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 13. Month-over-month schedule consistency
    // ---------------------------------------------------------------
    #[test]
    fn test_schedule_balances_chain() {
        let debts = vec![
            debt("a", dec!(2500), dec!(17.5), dec!(75)),
            debt("b", dec!(900), dec!(9.9), dec!(45)),
        ];
        let result = calculate_payoff(&input(debts, dec!(60), PayoffStrategy::Snowball)).unwrap();
        let schedule = &result.result.monthly_amortization;

        let mut previous = dec!(3400);
        for entry in schedule {
            let expected = previous - entry.principal_paid;
            let drift = (entry.balance - expected).abs();
            // Each entry is rounded independently, so allow a cent each way.
            assert!(drift <= dec!(0.02), "month {}: drift {}", entry.month, drift);
            previous = entry.balance;
        }
        assert_eq!(schedule.last().unwrap().balance, Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 14. Due date is informational only
    // ---------------------------------------------------------------
    #[test]
    fn test_due_date_never_affects_projection() {
        let mut early = debt("a", dec!(4000), dec!(15), dec!(120));
        early.due_date = 1;
        let mut late = early.clone();
        late.due_date = 28;

        let first =
            calculate_payoff(&input(vec![early], dec!(50), PayoffStrategy::Avalanche)).unwrap();
        let second =
            calculate_payoff(&input(vec![late], dec!(50), PayoffStrategy::Avalanche)).unwrap();

        assert_eq!(
            serde_json::to_value(&first.result).unwrap(),
            serde_json::to_value(&second.result).unwrap(),
        );
    }

    // ---------------------------------------------------------------
    // Validation errors
    // ---------------------------------------------------------------
    #[test]
    fn test_validation_negative_balance() {
        let debts = vec![debt("a", dec!(-1), dec!(5), dec!(50))];
        let err = calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Avalanche)).unwrap_err();
        match err {
            PayplanError::InvalidInput { field, .. } => {
                assert!(field.contains("current_balance"), "field={field}")
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_negative_rate() {
        let debts = vec![debt("a", dec!(100), dec!(-0.5), dec!(50))];
        assert!(calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Avalanche)).is_err());
    }

    #[test]
    fn test_validation_negative_minimum() {
        let debts = vec![debt("a", dec!(100), dec!(5), dec!(-50))];
        assert!(calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Avalanche)).is_err());
    }

    #[test]
    fn test_validation_due_date_out_of_range() {
        let mut d = debt("a", dec!(100), dec!(5), dec!(50));
        d.due_date = 0;
        assert!(calculate_payoff(&input(vec![d.clone()], dec!(0), PayoffStrategy::Avalanche))
            .is_err());
        d.due_date = 32;
        assert!(calculate_payoff(&input(vec![d], dec!(0), PayoffStrategy::Avalanche)).is_err());
    }

    #[test]
    fn test_validation_negative_extra_payment() {
        let debts = vec![debt("a", dec!(100), dec!(5), dec!(50))];
        let err = calculate_payoff(&input(debts, dec!(-1), PayoffStrategy::Avalanche)).unwrap_err();
        match err {
            PayplanError::InvalidInput { field, .. } => assert_eq!(field, "extra_payment"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_duplicate_ids() {
        let debts = vec![
            debt("a", dec!(100), dec!(5), dec!(50)),
            debt("a", dec!(200), dec!(8), dec!(25)),
        ];
        assert!(calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Avalanche)).is_err());
    }

    #[test]
    fn test_validation_empty_id() {
        let debts = vec![debt("", dec!(100), dec!(5), dec!(50))];
        assert!(calculate_payoff(&input(debts, dec!(0), PayoffStrategy::Avalanche)).is_err());
    }
}
