//! In-memory expense repositories.

pub mod memory;
pub mod shared;

pub use memory::ExpenseStore;
pub use shared::SharedExpenseStore;

use crate::domain::{Expense, ExpenseFields};
use crate::errors::ValidationError;

/// Capability required by [`ExpenseManager`](crate::core::ExpenseManager):
/// append-only insertion with id assignment plus read access.
pub trait ExpenseRepository {
    /// Validates `fields` under the next free id and stores the result.
    ///
    /// A rejected insertion leaves the repository untouched and does not
    /// consume an id.
    fn add(&mut self, fields: ExpenseFields) -> Result<Expense, ValidationError>;

    /// Looks up a stored expense; `None` for any unknown id.
    fn get_by_id(&self, id: u64) -> Option<Expense>;

    /// Snapshot of every stored expense in insertion order.
    fn get_all(&self) -> Vec<Expense>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ExpenseRepository + ?Sized> ExpenseRepository for &mut T {
    fn add(&mut self, fields: ExpenseFields) -> Result<Expense, ValidationError> {
        (**self).add(fields)
    }

    fn get_by_id(&self, id: u64) -> Option<Expense> {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> Vec<Expense> {
        (**self).get_all()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
