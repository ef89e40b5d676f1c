pub mod expense_manager;

pub use expense_manager::ExpenseManager;
