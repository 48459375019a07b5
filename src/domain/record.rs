use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::account::AccrualPolicy;

/// Classifies a ledger entry by the sign of its amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    /// `Income` for strictly positive amounts, `Expense` otherwise.
    pub fn of(amount: f64) -> Self {
        if amount > 0.0 {
            Direction::Income
        } else {
            Direction::Expense
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Income => "income",
            Direction::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// One firing cash flow or interest accrual, with the post-event running
/// total. Records are append-only and ordered by the loop's event sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub name: String,
    pub amount: f64,
    pub balance: f64,
    #[serde(rename = "type")]
    pub direction: Direction,
}

/// Total balance across accounts on a date that had at least one event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: f64,
}

/// Per-account observation taken at each monthly accrual.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankObservation {
    pub date: NaiveDate,
    pub bank: String,
    pub balance: f64,
    pub interest_rate: f64,
    pub interest_type: AccrualPolicy,
    pub interest: f64,
}
