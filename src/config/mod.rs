//! Forecast configuration: an explicit value deserialized from a JSON file
//! and validated before the run. No process-wide state; the engine entry
//! point takes the resulting accounts and schedule as arguments, so it can
//! be re-run in-process with different inputs.

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccrualPolicy, DailyFlow, FlowSchedule, MonthlyFlow, OneOffFlow};
use crate::errors::ForecastError;

/// One account as spelled in the configuration file. The accrual policy
/// stays a string until validation so an unknown value can be reported
/// against the account that carries it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountConfig {
    pub name: String,
    pub opening_balance: f64,
    pub interest_rate: f64,
    pub accrual_policy: String,
}

impl AccountConfig {
    fn build(&self) -> Result<Account, ForecastError> {
        let policy = AccrualPolicy::parse(&self.accrual_policy).ok_or_else(|| {
            ForecastError::UnknownAccrualPolicy {
                account: self.name.clone(),
                policy: self.accrual_policy.clone(),
            }
        })?;
        Ok(Account::new(
            self.name.clone(),
            self.opening_balance,
            self.interest_rate,
            policy,
        ))
    }
}

/// The full run configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastConfig {
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
    #[serde(default)]
    pub monthly: Vec<MonthlyFlow>,
    #[serde(default)]
    pub daily: Vec<DailyFlow>,
    #[serde(default)]
    pub one_off: Vec<OneOffFlow>,
    /// Calendar month (1-12) at which the simulation truncates, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff_month: Option<u32>,
    /// Dashboard document location; falls back to the default path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl ForecastConfig {
    pub fn from_path(path: &Path) -> Result<Self, ForecastError> {
        let data = fs::read_to_string(path).map_err(|err| {
            ForecastError::InvalidConfig(format!(
                "cannot read configuration `{}`: {}",
                path.display(),
                err
            ))
        })?;
        let config: ForecastConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks beyond what serde enforces. Fails fast; an
    /// unrecognized accrual policy or duplicate account name never makes it
    /// into a run.
    pub fn validate(&self) -> Result<(), ForecastError> {
        for account in &self.accounts {
            account.build()?;
        }
        for (index, account) in self.accounts.iter().enumerate() {
            if self.accounts[..index]
                .iter()
                .any(|other| other.name == account.name)
            {
                return Err(ForecastError::InvalidConfig(format!(
                    "duplicate account name `{}`",
                    account.name
                )));
            }
        }
        for flow in &self.monthly {
            if !(1..=31).contains(&flow.day_of_month) {
                return Err(ForecastError::InvalidConfig(format!(
                    "monthly flow `{}` has day_of_month {} outside 1-31",
                    flow.name, flow.day_of_month
                )));
            }
        }
        if let Some(month) = self.cutoff_month {
            if !(1..=12).contains(&month) {
                return Err(ForecastError::InvalidConfig(format!(
                    "cutoff_month {} outside 1-12",
                    month
                )));
            }
        }
        Ok(())
    }

    /// Materializes the validated accounts in declared order.
    pub fn accounts(&self) -> Result<Vec<Account>, ForecastError> {
        self.accounts.iter().map(AccountConfig::build).collect()
    }

    pub fn flow_schedule(&self) -> FlowSchedule {
        FlowSchedule {
            monthly: self.monthly.clone(),
            daily: self.daily.clone(),
            one_off: self.one_off.clone(),
        }
    }

    /// Sum of opening balances, the simulation's starting total.
    pub fn starting_total(&self) -> f64 {
        self.accounts
            .iter()
            .map(|account| account.opening_balance)
            .sum()
    }
}
