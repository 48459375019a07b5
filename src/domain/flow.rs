use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recurring flow that fires on a fixed calendar day of every month.
///
/// `day_of_month` is in [1, 31]; a month shorter than `day_of_month` simply
/// never fires that month. There is no clamping to the month's last day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyFlow {
    pub name: String,
    pub amount: f64,
    pub day_of_month: u32,
}

/// Flow that fires on every simulated date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyFlow {
    pub name: String,
    pub amount: f64,
}

/// Flow that fires exactly once, on exact calendar-date equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OneOffFlow {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// The full set of configured cash flows, immutable for a run.
///
/// Each collection keeps its configuration-declared order; the schedule
/// resolver relies on that order to produce a deterministic event sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlowSchedule {
    #[serde(default)]
    pub monthly: Vec<MonthlyFlow>,
    #[serde(default)]
    pub daily: Vec<DailyFlow>,
    #[serde(default)]
    pub one_off: Vec<OneOffFlow>,
}

impl FlowSchedule {
    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty() && self.daily.is_empty() && self.one_off.is_empty()
    }
}
