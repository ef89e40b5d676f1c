//! Aggregation service layered over an expense repository.

use rust_decimal::Decimal;

use crate::domain::{CostTier, Expense, ExpenseFields};
use crate::errors::ValidationError;
use crate::store::ExpenseRepository;

/// Composes repository access with derived, read-only computations.
///
/// The manager holds a handle onto a repository (typically `&mut ExpenseStore`
/// or a [`SharedExpenseStore`](crate::store::SharedExpenseStore) clone) and
/// never keeps a copy of the stored data.
pub struct ExpenseManager<R> {
    store: R,
}

impl<R: ExpenseRepository> ExpenseManager<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Inserts through the repository; outcome is passed back unchanged.
    pub fn add_expense(&mut self, fields: ExpenseFields) -> Result<Expense, ValidationError> {
        self.store.add(fields)
    }

    pub fn get_expense(&self, id: u64) -> Option<Expense> {
        self.store.get_by_id(id)
    }

    pub fn list_expenses(&self) -> Vec<Expense> {
        self.store.get_all()
    }

    /// Sum of every stored amount; zero for an empty store.
    ///
    /// Amounts are positive, so a sum past the representable range saturates
    /// at [`Decimal::MAX`].
    pub fn get_total_expenses(&self) -> Decimal {
        let expenses = self.store.get_all();
        let total = expenses
            .iter()
            .map(Expense::amount)
            .try_fold(Decimal::ZERO, Decimal::checked_add);
        total.unwrap_or_else(|| {
            tracing::warn!(count = expenses.len(), "expense total overflows, saturating");
            Decimal::MAX
        })
    }

    /// Pure function of `expense.amount()`; the expense need not be stored here.
    pub fn categorize_expense_by_cost(&self, expense: &Expense) -> CostTier {
        CostTier::for_amount(expense.amount())
    }
}
