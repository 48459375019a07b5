//! The persisted dashboard document and its sections.
//!
//! The document is read once per run (to recover prior budget items and bank
//! ids) and written once, overwriting the previous run's file. Budget items
//! are user-editable in the dashboard, so unknown fields on them are carried
//! through verbatim.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::AccrualPolicy;
use crate::domain::record::{BalancePoint, BankObservation, Direction, TransactionRecord};

/// Run-level summary block at the head of the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunMetadata {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub starting_balance: f64,
    pub final_balance: f64,
    pub total_opening_balance: f64,
    pub account_count: usize,
}

/// A dashboard budget entry.
///
/// Auto-generated entries are the per-account interest items the exporter
/// synthesizes; everything else comes from the user and round-trips
/// untouched, including fields this crate does not model (`extra`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetItem {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: Direction,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_auto_generated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_bank_id: Option<Uuid>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One account as listed in the document's `banks` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankEntry {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
    pub interest_rate: f64,
    pub interest_type: AccrualPolicy,
}

/// The full persisted snapshot of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardDocument {
    pub metadata: RunMetadata,
    pub balance_data: Vec<BalancePoint>,
    pub transactions: Vec<TransactionRecord>,
    pub bank_data: Vec<BankObservation>,
    pub budget: Vec<BudgetItem>,
    pub banks: Vec<BankEntry>,
}

/// The slice of a prior document the exporter needs: budget items to merge
/// and bank entries whose ids should stay stable. Deserializes leniently so
/// older or partial documents still contribute what they have.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PriorState {
    #[serde(default)]
    pub budget: Vec<BudgetItem>,
    #[serde(default)]
    pub banks: Vec<BankEntry>,
}

impl PriorState {
    pub fn from_document(document: &DashboardDocument) -> Self {
        Self {
            budget: document.budget.clone(),
            banks: document.banks.clone(),
        }
    }
}
