#![doc(test(attr(deny(warnings))))]

//! Tracker Core offers the domain records, JSON-backed event store, and pure
//! aggregation engine behind a personal habit/task/finance tracker.

pub mod dates;
pub mod domain;
pub mod errors;
pub mod services;
pub mod stats;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tracker Core tracing initialized.");
    });
}
