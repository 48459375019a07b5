use std::fmt;

use colored::Colorize;

use crate::domain::TransactionRecord;

/// Formats a monetary value, green for non-negative and red for negative.
pub fn signed_money(value: f64) -> String {
    let text = format!("${:.2}", value);
    if value >= 0.0 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

/// One console line per ledger record: date, colored amount, colored
/// post-event total.
pub fn event_line(record: &TransactionRecord) -> String {
    format!(
        "{} - {}: {} - Total: {}",
        record.date,
        record.name,
        signed_money(record.amount),
        signed_money(record.balance)
    )
}

pub fn section(title: impl fmt::Display) {
    println!("\n{}", format!("=== {} ===", title).bold());
}

pub fn info(message: impl fmt::Display) {
    println!("{}", message);
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", format!("WARNING: {}", message).bright_yellow());
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", format!("ERROR: {}", message).bright_red());
}
