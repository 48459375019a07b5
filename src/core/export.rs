//! Shapes a finished simulation into the persisted dashboard document,
//! merging budget items preserved from a prior run.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::core::engine::SimulationOutcome;
use crate::core::interest::{interest_event_name, monthly_accrual};
use crate::domain::{
    BankEntry, BudgetItem, DashboardDocument, Direction, PriorState, RunMetadata,
};

/// Builds the document for a completed run.
///
/// Prior budget items round-trip untouched, except that auto-generated
/// interest items are matched to the run's accounts by name: a match is kept
/// as-is (preserving user edits), a missing one is synthesized from the
/// account's current monthly interest, and an orphan whose account no longer
/// exists is dropped. Bank entries reuse a prior entry's id when an account
/// of the same name existed, so dashboard links stay valid across runs.
///
/// Writing the document is the caller's job (see `storage::DocumentStore`);
/// this function has no side effects.
pub fn build_document(
    outcome: &SimulationOutcome,
    start_date: NaiveDate,
    end_date: NaiveDate,
    starting_total: f64,
    prior: &PriorState,
) -> DashboardDocument {
    let total_opening_balance: f64 = outcome
        .accounts
        .iter()
        .map(|account| account.opening_balance)
        .sum();

    let banks: Vec<BankEntry> = outcome
        .accounts
        .iter()
        .map(|account| BankEntry {
            id: prior_bank_id(prior, &account.name).unwrap_or_else(Uuid::new_v4),
            name: account.name.clone(),
            balance: account.current_balance,
            interest_rate: account.interest_rate,
            interest_type: account.accrual_policy,
        })
        .collect();

    let mut budget: Vec<BudgetItem> = prior
        .budget
        .iter()
        .filter(|item| !is_orphaned_interest_item(item, outcome))
        .cloned()
        .collect();
    let carried = budget.len();

    for (account, bank) in outcome.accounts.iter().zip(&banks) {
        let item_name = interest_event_name(&account.name);
        let exists = budget
            .iter()
            .any(|item| item.is_auto_generated && item.name == item_name);
        if exists {
            continue;
        }
        budget.push(BudgetItem {
            id: Uuid::new_v4(),
            name: item_name,
            amount: monthly_accrual(account),
            kind: Direction::Income,
            start_date,
            end_date: None,
            is_auto_generated: true,
            linked_bank_id: Some(bank.id),
            extra: serde_json::Map::new(),
        });
    }

    debug!(
        carried,
        synthesized = budget.len() - carried,
        dropped = prior.budget.len() - carried,
        "merged budget items"
    );

    DashboardDocument {
        metadata: RunMetadata {
            start_date,
            end_date,
            starting_balance: starting_total,
            final_balance: outcome.final_total,
            total_opening_balance,
            account_count: outcome.accounts.len(),
        },
        balance_data: outcome.balance_points.clone(),
        transactions: outcome.transactions.clone(),
        bank_data: outcome.bank_observations.clone(),
        budget,
        banks,
    }
}

fn prior_bank_id(prior: &PriorState, name: &str) -> Option<Uuid> {
    prior
        .banks
        .iter()
        .find(|bank| bank.name == name)
        .map(|bank| bank.id)
}

/// An auto-generated interest item whose account is gone from this run.
fn is_orphaned_interest_item(item: &BudgetItem, outcome: &SimulationOutcome) -> bool {
    if !item.is_auto_generated {
        return false;
    }
    match item.name.strip_suffix(" Interest") {
        Some(account_name) => !outcome
            .accounts
            .iter()
            .any(|account| account.name == account_name),
        None => false,
    }
}
