#![doc(test(attr(deny(warnings))))]

//! Payday Forecast projects paychecks and recurring expenses onto a calendar
//! and reports the running balance, monthly summaries, and how much is safe
//! to spend before the next payday.

pub mod config;
pub mod date;
pub mod domain;
pub mod errors;
pub mod forecast;
pub mod pay;
pub mod schedule;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with_level("info");
}

/// Same as [`init`], using the log level from the user's config.
pub fn init_with_level(level: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(level);
        tracing::info!("Payday Forecast tracing initialized.");
    });
}
