use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::core::interest::{interest_event_name, monthly_accrual};
use crate::core::schedule::{due_flows, DueEvent};
use crate::domain::{
    Account, BalancePoint, BankObservation, Direction, FlowSchedule, TransactionRecord,
};

/// Named stopping rule for the simulation loop.
///
/// `Boundary` runs through the boundary date inclusively. `MonthCutoff`
/// additionally halts as soon as the cursor enters the given calendar month,
/// truncating the nominal boundary; the truncated and full-range behaviors
/// are both reachable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRule {
    Boundary(NaiveDate),
    MonthCutoff { boundary: NaiveDate, month: u32 },
}

impl StopRule {
    /// Boundary at December 31 of the target year.
    pub fn year_end(year: i32) -> Self {
        StopRule::Boundary(NaiveDate::from_ymd_opt(year, 12, 31).unwrap())
    }

    /// Year-end boundary truncated at the first day of `month`.
    pub fn year_end_with_cutoff(year: i32, month: u32) -> Self {
        StopRule::MonthCutoff {
            boundary: NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
            month,
        }
    }

    /// The nominal end boundary, regardless of any cutoff.
    pub fn boundary(&self) -> NaiveDate {
        match self {
            StopRule::Boundary(date) => *date,
            StopRule::MonthCutoff { boundary, .. } => *boundary,
        }
    }

    fn halts(&self, cursor: NaiveDate) -> bool {
        match self {
            StopRule::Boundary(boundary) => cursor > *boundary,
            StopRule::MonthCutoff { boundary, month } => {
                cursor > *boundary || cursor.month() == *month
            }
        }
    }
}

/// Everything one simulation run produced.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub transactions: Vec<TransactionRecord>,
    pub balance_points: Vec<BalancePoint>,
    pub bank_observations: Vec<BankObservation>,
    pub accounts: Vec<Account>,
    pub final_total: f64,
}

/// Runs the day-stepped simulation from `start_date` until `stop` halts it.
///
/// Each iteration: on the first of a month, every account accrues interest
/// (in declared order) and the amounts join that day's events; then the due
/// flows are resolved. Every event updates the running total and appends a
/// transaction record carrying the post-event total, and a date with at
/// least one event contributes one balance point. The loop owns all balance
/// mutation and performs no I/O.
///
/// A boundary before `start_date` yields an empty ledger with
/// `final_total == starting_total`.
pub fn simulate(
    schedule: &FlowSchedule,
    mut accounts: Vec<Account>,
    starting_total: f64,
    start_date: NaiveDate,
    stop: &StopRule,
) -> SimulationOutcome {
    let mut total = starting_total;
    let mut transactions = Vec::new();
    let mut balance_points = vec![BalancePoint {
        date: start_date,
        balance: total,
    }];
    let mut bank_observations = Vec::new();

    debug!(
        start = %start_date,
        boundary = %stop.boundary(),
        accounts = accounts.len(),
        "starting simulation"
    );

    let mut cursor = start_date;
    while !stop.halts(cursor) {
        let mut day_events: Vec<DueEvent> = Vec::new();

        if cursor.day() == 1 {
            for account in accounts.iter_mut() {
                let interest = monthly_accrual(account);
                account.current_balance += interest;
                day_events.push(DueEvent {
                    name: interest_event_name(&account.name),
                    amount: interest,
                });
                bank_observations.push(BankObservation {
                    date: cursor,
                    bank: account.name.clone(),
                    balance: account.current_balance,
                    interest_rate: account.interest_rate,
                    interest_type: account.accrual_policy,
                    interest,
                });
            }
        }

        day_events.extend(due_flows(cursor, schedule));

        if !day_events.is_empty() {
            for event in day_events {
                total += event.amount;
                transactions.push(TransactionRecord {
                    date: cursor,
                    name: event.name,
                    amount: event.amount,
                    balance: total,
                    direction: Direction::of(event.amount),
                });
            }
            balance_points.push(BalancePoint {
                date: cursor,
                balance: total,
            });
        }

        cursor = cursor + Duration::days(1);
    }

    debug!(
        last_cursor = %cursor,
        transactions = transactions.len(),
        final_total = total,
        "simulation finished"
    );

    SimulationOutcome {
        transactions,
        balance_points,
        bank_observations,
        accounts,
        final_total: total,
    }
}
