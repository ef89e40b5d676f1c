//! Expense domain types: the validated entity, its input field set, and the
//! cost tiers used for classification.

pub mod cost_tier;
pub mod expense;

pub use cost_tier::CostTier;
pub use expense::{Expense, ExpenseFields};

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use rust_decimal;
