#![doc(test(attr(deny(warnings))))]

//! Expense Core records validated expense entries in an append-only in-memory
//! store and derives totals, cost tiers, and currency conversions from them.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod store;
pub mod task;
pub mod utils;

pub use crate::core::ExpenseManager;
pub use domain::{CostTier, Expense, ExpenseFields};
pub use errors::{ValidationError, ValidationErrorKind};
pub use store::{ExpenseRepository, ExpenseStore, SharedExpenseStore};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
