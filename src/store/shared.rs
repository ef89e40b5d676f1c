use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{Expense, ExpenseFields};
use crate::errors::ValidationError;

use super::{ExpenseRepository, ExpenseStore};

/// Cloneable, thread-safe handle onto one [`ExpenseStore`].
///
/// Every clone addresses the same store. Insertion holds the lock across
/// "read counter, validate, append, increment", so ids stay unique and
/// monotonic with concurrent writers.
#[derive(Debug, Clone, Default)]
pub struct SharedExpenseStore {
    inner: Arc<Mutex<ExpenseStore>>,
}

impl SharedExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: ExpenseStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // Store operations never leave partial state behind, so a poisoned lock
    // still guards a consistent store.
    fn lock(&self) -> MutexGuard<'_, ExpenseStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ExpenseRepository for SharedExpenseStore {
    fn add(&mut self, fields: ExpenseFields) -> Result<Expense, ValidationError> {
        self.lock().add(fields)
    }

    fn get_by_id(&self, id: u64) -> Option<Expense> {
        self.lock().get(id).cloned()
    }

    fn get_all(&self) -> Vec<Expense> {
        self.lock().iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
