#![doc(test(attr(deny(warnings))))]

//! Finmex models two everyday financial products — yield-bearing debit
//! accounts and credit cards — and reports what they actually cost or earn
//! once tax, inflation, fees, and cashback are taken into account.

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod errors;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Finmex tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("finmex=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
