#![doc(test(attr(deny(warnings))))]

//! Cashcast projects a set of bank balances forward in time, day by day,
//! applying monthly interest accrual and configured cash flows, and exports
//! the resulting ledger as a dashboard document.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashcast tracing initialized.");
    });
}
