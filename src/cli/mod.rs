//! One-shot command-line front end: displays the configured setup, resolves
//! the target year, runs the simulation, streams the ledger to the console,
//! and exports the dashboard document. Everything here is a thin wrapper
//! around the core; no balance arithmetic happens in this module.

pub mod output;

use std::{env, path::PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::config::ForecastConfig;
use crate::core::{build_document, simulate, StopRule};
use crate::errors::ForecastError;
use crate::storage::{default_document_path, DocumentStore, LoadStatus};

const DEFAULT_DIR_NAME: &str = ".cashcast";
const CONFIG_FILE: &str = "forecast.json";

/// Default location of the forecast configuration,
/// `~/.cashcast/forecast.json`, overridable through `CASHCAST_HOME`.
pub fn default_config_path() -> PathBuf {
    if let Some(custom) = env::var_os("CASHCAST_HOME") {
        return PathBuf::from(custom).join(CONFIG_FILE);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
        .join(CONFIG_FILE)
}

#[derive(Parser, Debug)]
#[command(name = "cashcast")]
#[command(about = "Projects bank balances day by day and exports a dashboard ledger")]
struct Cli {
    /// Forecast configuration file (accounts, flows, options).
    #[arg(long, env = "CASHCAST_CONFIG")]
    config: Option<PathBuf>,

    /// Dashboard document to merge from and overwrite.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Year to simulate through; prompted interactively when omitted.
    #[arg(long)]
    year: Option<i32>,
}

pub fn run_cli() -> Result<(), ForecastError> {
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = ForecastConfig::from_path(&config_path)?;
    let accounts = config.accounts()?;
    let schedule = config.flow_schedule();
    let starting_total = config.starting_total();

    display_setup(&config, starting_total);

    let year = match cli.year {
        Some(year) => {
            if year < today.year() {
                return Err(ForecastError::InvalidConfig(format!(
                    "target year {} is before the current year {}",
                    year,
                    today.year()
                )));
            }
            year
        }
        None => prompt_target_year(today)?,
    };

    let stop = match config.cutoff_month {
        Some(month) => StopRule::year_end_with_cutoff(year, month),
        None => StopRule::year_end(year),
    };

    output::section(format!(
        "COST SIMULATION FROM {} TO {}",
        today,
        stop.boundary()
    ));
    let outcome = simulate(&schedule, accounts, starting_total, today, &stop);
    for record in &outcome.transactions {
        output::info(output::event_line(record));
    }

    let data_path = cli
        .data_file
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(default_document_path);
    let store = DocumentStore::new(data_path);
    let (prior, status) = store.load_prior();
    if status == LoadStatus::Corrupt {
        output::warning(format!(
            "prior data at {} was unreadable; budget edits from earlier runs were not recovered",
            store.path().display()
        ));
    }
    let preserved = prior.budget.len();

    let document = build_document(&outcome, today, stop.boundary(), starting_total, &prior);
    store.save(&document)?;

    output::section("SIMULATION COMPLETE");
    output::info(format!(
        "Final Total: {}",
        output::signed_money(outcome.final_total)
    ));
    output::info(format!("Data exported to {}", store.path().display()));
    output::info(format!("Budget items preserved: {}", preserved));
    Ok(())
}

/// Mirrors the configuration back to the user before the run.
fn display_setup(config: &ForecastConfig, starting_total: f64) {
    output::section("CURRENT COST SETUP");
    output::info(format!(
        "Starting Balance: {}",
        output::signed_money(starting_total)
    ));

    if !config.accounts.is_empty() {
        output::info("\nAccounts:");
        for account in &config.accounts {
            output::info(format!(
                "  {}: {} at {:.2}% ({})",
                account.name,
                output::signed_money(account.opening_balance),
                account.interest_rate * 100.0,
                account.accrual_policy
            ));
        }
    }

    output::info("\nMonthly Costs:");
    for flow in &config.monthly {
        output::info(format!(
            "  {}: {} on day {}",
            flow.name,
            output::signed_money(flow.amount),
            flow.day_of_month
        ));
    }

    output::info("\nDaily Costs:");
    for flow in &config.daily {
        output::info(format!(
            "  {}: {}",
            flow.name,
            output::signed_money(flow.amount)
        ));
    }

    output::info("\nOne-off Events:");
    for flow in &config.one_off {
        output::info(format!(
            "  {}: {} on {}",
            flow.name,
            output::signed_money(flow.amount),
            flow.date
        ));
    }
}

/// Asks for a target year until the answer is the current year or later.
fn prompt_target_year(today: NaiveDate) -> Result<i32, ForecastError> {
    let current_year = today.year();
    let year = Input::<i32>::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the year to run until")
        .validate_with(move |year: &i32| -> Result<(), String> {
            if *year >= current_year {
                Ok(())
            } else {
                Err(format!(
                    "please enter a year that is {} or later",
                    current_year
                ))
            }
        })
        .interact_text()?;
    Ok(year)
}
