#![doc(test(attr(deny(warnings))))]

//! Kakeibo is a small household ledger viewer: a pure aggregation engine that
//! groups income and expense records by calendar month, plus the terminal pages
//! that display its results.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Kakeibo tracing initialized.");
    });
}
