use std::fmt;

use serde::{Deserialize, Serialize};

/// Interest-computation rule for an account.
///
/// `Simple` interest is always computed off the opening balance, so accrued
/// interest never earns further interest. `Compound` derives a true monthly
/// increment from the annual nominal rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccrualPolicy {
    Simple,
    Compound,
}

impl AccrualPolicy {
    /// Parses the configuration spelling of a policy. Returns `None` for
    /// anything other than the two supported values; callers turn that into
    /// a configuration error naming the offending account.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "simple" => Some(AccrualPolicy::Simple),
            "compound" => Some(AccrualPolicy::Compound),
            _ => None,
        }
    }
}

impl fmt::Display for AccrualPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccrualPolicy::Simple => "simple",
            AccrualPolicy::Compound => "compound",
        };
        f.write_str(label)
    }
}

/// A named bank balance with an interest rate and accrual policy.
///
/// `current_balance` starts equal to `opening_balance` and is mutated only by
/// the simulation loop applying a monthly accrual, on the first day of each
/// month. Accounts are constructed once per run and never rebuilt mid-run.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub name: String,
    pub opening_balance: f64,
    pub interest_rate: f64,
    pub accrual_policy: AccrualPolicy,
    pub current_balance: f64,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        opening_balance: f64,
        interest_rate: f64,
        accrual_policy: AccrualPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            opening_balance,
            interest_rate,
            accrual_policy,
            current_balance: opening_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_known_policies() {
        assert_eq!(AccrualPolicy::parse("simple"), Some(AccrualPolicy::Simple));
        assert_eq!(
            AccrualPolicy::parse("compound"),
            Some(AccrualPolicy::Compound)
        );
        assert_eq!(AccrualPolicy::parse("Simple"), None);
        assert_eq!(AccrualPolicy::parse("monthly"), None);
    }

    #[test]
    fn new_account_starts_at_opening_balance() {
        let account = Account::new("BOK", 5000.0, 0.001, AccrualPolicy::Simple);
        assert_eq!(account.current_balance, account.opening_balance);
    }
}
