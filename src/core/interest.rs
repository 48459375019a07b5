use crate::domain::{Account, AccrualPolicy};

/// Computes the interest an account earns at a monthly accrual point.
///
/// Pure: the engine never mutates the account. Adding the returned amount to
/// `current_balance` is the simulation loop's responsibility, which keeps
/// this computation directly testable.
///
/// - `Compound`: `current_balance * ((1 + rate)^(1/12) - 1)`, the true
///   monthly increment derived from the annual nominal rate.
/// - `Simple`: `opening_balance * rate / 12`. Always off the opening
///   balance: accrued simple interest does not itself earn interest.
///
/// A zero rate yields zero; a negative balance yields negative interest by
/// the same formulas.
pub fn monthly_accrual(account: &Account) -> f64 {
    match account.accrual_policy {
        AccrualPolicy::Compound => {
            account.current_balance * ((1.0 + account.interest_rate).powf(1.0 / 12.0) - 1.0)
        }
        AccrualPolicy::Simple => account.opening_balance * account.interest_rate / 12.0,
    }
}

/// The ledger and budget-item name for an account's accrual events.
pub fn interest_event_name(account_name: &str) -> String {
    format!("{} Interest", account_name)
}
