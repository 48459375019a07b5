use cashcast::core::{simulate, StopRule};
use cashcast::domain::{
    Account, AccrualPolicy, DailyFlow, Direction, FlowSchedule, MonthlyFlow, OneOffFlow,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn schedule_with_monthly(name: &str, amount: f64, day_of_month: u32) -> FlowSchedule {
    FlowSchedule {
        monthly: vec![MonthlyFlow {
            name: name.into(),
            amount,
            day_of_month,
        }],
        ..Default::default()
    }
}

#[test]
fn empty_configuration_changes_nothing() {
    let outcome = simulate(
        &FlowSchedule::default(),
        Vec::new(),
        8236.0,
        date(2026, 1, 1),
        &StopRule::year_end(2026),
    );
    assert!(outcome.transactions.is_empty());
    assert!(outcome.bank_observations.is_empty());
    assert_eq!(outcome.final_total, 8236.0);
}

#[test]
fn simple_interest_is_identical_every_month() {
    let outcome = simulate(
        &FlowSchedule::default(),
        vec![Account::new("CO", 3000.0, 0.036, AccrualPolicy::Simple)],
        3000.0,
        date(2026, 1, 1),
        &StopRule::Boundary(date(2026, 6, 30)),
    );
    let expected = 3000.0 * 0.036 / 12.0;
    assert_eq!(outcome.transactions.len(), 6);
    for record in &outcome.transactions {
        assert!((record.amount - expected).abs() < 1e-12);
        assert_eq!(record.name, "CO Interest");
    }
}

#[test]
fn compound_interest_reaches_the_annual_rate_after_a_year() {
    // 1000 at 12% compound, twelve accruals: ~1120.00.
    let outcome = simulate(
        &FlowSchedule::default(),
        vec![Account::new("CO", 1000.0, 0.12, AccrualPolicy::Compound)],
        1000.0,
        date(2026, 1, 1),
        &StopRule::year_end(2026),
    );
    assert_eq!(outcome.bank_observations.len(), 12);
    let account = &outcome.accounts[0];
    assert!((account.current_balance - 1120.0).abs() < 0.01);
    assert!((outcome.final_total - 1120.0).abs() < 0.01);
}

#[test]
fn compound_balance_matches_closed_form_for_partial_years() {
    let months = 7;
    let outcome = simulate(
        &FlowSchedule::default(),
        vec![Account::new("CO", 2500.0, 0.048, AccrualPolicy::Compound)],
        2500.0,
        date(2026, 1, 1),
        &StopRule::Boundary(date(2026, 7, 31)),
    );
    let expected = 2500.0 * (1.0f64 + 0.048).powf(months as f64 / 12.0);
    assert!((outcome.accounts[0].current_balance - expected).abs() < 1e-6);
}

#[test]
fn day_31_fires_only_in_31_day_months() {
    let outcome = simulate(
        &schedule_with_monthly("paycheck", 1000.0, 31),
        Vec::new(),
        0.0,
        date(2026, 1, 1),
        &StopRule::Boundary(date(2026, 4, 30)),
    );
    // January and March only; February and April are too short.
    let dates: Vec<NaiveDate> = outcome
        .transactions
        .iter()
        .map(|record| record.date)
        .collect();
    assert_eq!(dates, vec![date(2026, 1, 31), date(2026, 3, 31)]);
}

#[test]
fn one_off_fires_exactly_once_for_any_bracketing_start() {
    let schedule = FlowSchedule {
        one_off: vec![OneOffFlow {
            name: "world_cup".into(),
            amount: -1500.0,
            date: date(2026, 6, 15),
        }],
        ..Default::default()
    };
    for start in [date(2026, 1, 1), date(2026, 6, 1), date(2026, 6, 15)] {
        let outcome = simulate(&schedule, Vec::new(), 0.0, start, &StopRule::year_end(2026));
        assert_eq!(outcome.transactions.len(), 1, "start {start}");
        assert_eq!(outcome.transactions[0].date, date(2026, 6, 15));
    }
    // Starting past the date, it never fires again.
    let outcome = simulate(
        &schedule,
        Vec::new(),
        0.0,
        date(2026, 6, 16),
        &StopRule::year_end(2026),
    );
    assert!(outcome.transactions.is_empty());
}

#[test]
fn rent_on_the_first_leaves_a_single_expense_record() {
    let outcome = simulate(
        &schedule_with_monthly("rent", -500.0, 1),
        Vec::new(),
        1000.0,
        date(2026, 5, 1),
        &StopRule::Boundary(date(2026, 5, 1)),
    );
    assert_eq!(outcome.final_total, 500.0);
    assert_eq!(outcome.transactions.len(), 1);
    let record = &outcome.transactions[0];
    assert_eq!(record.amount, -500.0);
    assert_eq!(record.balance, 500.0);
    assert_eq!(record.direction, Direction::Expense);
}

#[test]
fn per_date_event_order_is_interest_monthly_daily_one_off() {
    let schedule = FlowSchedule {
        monthly: vec![MonthlyFlow {
            name: "rent".into(),
            amount: -500.0,
            day_of_month: 1,
        }],
        daily: vec![DailyFlow {
            name: "food".into(),
            amount: -15.0,
        }],
        one_off: vec![OneOffFlow {
            name: "club_fees".into(),
            amount: -100.0,
            date: date(2026, 9, 1),
        }],
    };
    let outcome = simulate(
        &schedule,
        vec![Account::new("BOK", 5000.0, 0.001, AccrualPolicy::Simple)],
        5000.0,
        date(2026, 9, 1),
        &StopRule::Boundary(date(2026, 9, 1)),
    );
    let names: Vec<&str> = outcome
        .transactions
        .iter()
        .map(|record| record.name.as_str())
        .collect();
    assert_eq!(names, vec!["BOK Interest", "rent", "food", "club_fees"]);
    // Final total is the order-independent sum.
    let sum: f64 = outcome.transactions.iter().map(|r| r.amount).sum();
    assert!((outcome.final_total - (5000.0 + sum)).abs() < 1e-9);
}

#[test]
fn accounts_accrue_in_declared_order() {
    let outcome = simulate(
        &FlowSchedule::default(),
        vec![
            Account::new("BOK", 5000.0, 0.001, AccrualPolicy::Simple),
            Account::new("CO", 3000.0, 0.036, AccrualPolicy::Compound),
        ],
        8000.0,
        date(2026, 2, 1),
        &StopRule::Boundary(date(2026, 2, 1)),
    );
    let names: Vec<&str> = outcome
        .transactions
        .iter()
        .map(|record| record.name.as_str())
        .collect();
    assert_eq!(names, vec!["BOK Interest", "CO Interest"]);
}

#[test]
fn month_cutoff_truncates_the_nominal_year() {
    let schedule = schedule_with_monthly("rent", -500.0, 1);
    let truncated = simulate(
        &schedule,
        Vec::new(),
        10000.0,
        date(2026, 1, 1),
        &StopRule::year_end_with_cutoff(2026, 7),
    );
    let full = simulate(
        &schedule,
        Vec::new(),
        10000.0,
        date(2026, 1, 1),
        &StopRule::year_end(2026),
    );
    // January through June versus the whole year.
    assert_eq!(truncated.transactions.len(), 6);
    assert_eq!(full.transactions.len(), 12);
}
