use chrono::{Datelike, NaiveDate};

use crate::domain::FlowSchedule;

/// A cash flow that is due on a particular date.
#[derive(Debug, Clone, PartialEq)]
pub struct DueEvent {
    pub name: String,
    pub amount: f64,
}

/// Returns the configured flows due on `date`, in the deterministic per-date
/// order: monthly, then daily, then one-off, each group in its
/// configuration-declared order. Interest accrual events precede all of
/// these but are emitted by the simulation loop itself.
///
/// The ordering affects ledger readability and the per-event recorded
/// balances, not the end-of-date total.
pub fn due_flows(date: NaiveDate, schedule: &FlowSchedule) -> Vec<DueEvent> {
    let mut due = Vec::new();

    for flow in &schedule.monthly {
        if date.day() == flow.day_of_month {
            due.push(DueEvent {
                name: flow.name.clone(),
                amount: flow.amount,
            });
        }
    }

    for flow in &schedule.daily {
        due.push(DueEvent {
            name: flow.name.clone(),
            amount: flow.amount,
        });
    }

    for flow in &schedule.one_off {
        if date == flow.date {
            due.push(DueEvent {
                name: flow.name.clone(),
                amount: flow.amount,
            });
        }
    }

    due
}
