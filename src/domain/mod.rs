//! Domain entities for the forecast: accounts, cash flows, ledger records,
//! and the persisted dashboard document.

pub mod account;
pub mod document;
pub mod flow;
pub mod record;

pub use account::{Account, AccrualPolicy};
pub use document::{BankEntry, BudgetItem, DashboardDocument, PriorState, RunMetadata};
pub use flow::{DailyFlow, FlowSchedule, MonthlyFlow, OneOffFlow};
pub use record::{BalancePoint, BankObservation, Direction, TransactionRecord};
