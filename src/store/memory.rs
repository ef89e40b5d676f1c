use std::collections::BTreeMap;

use crate::domain::{Expense, ExpenseFields};
use crate::errors::ValidationError;

use super::ExpenseRepository;

/// Append-only, process-scoped ledger of expenses.
///
/// Ids are handed out from a counter starting at 1 and only advance on a
/// successful insertion. Since ids grow monotonically, iterating the id-keyed
/// map yields insertion order.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    expenses: BTreeMap<u64, Expense>,
    next_id: u64,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self {
            expenses: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Id the next successful insertion will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn add(&mut self, fields: ExpenseFields) -> Result<Expense, ValidationError> {
        let id = self.next_id;
        let expense = match Expense::new(id, fields) {
            Ok(expense) => expense,
            Err(err) => {
                tracing::warn!(field = err.field(), error = %err, "expense rejected");
                return Err(err);
            }
        };
        self.expenses.insert(id, expense.clone());
        self.next_id += 1;
        tracing::debug!(id, amount = %expense.amount(), "expense stored");
        Ok(expense)
    }

    pub fn get(&self, id: u64) -> Option<&Expense> {
        self.expenses.get(&id)
    }

    /// Borrowing, read-only view in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.values()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseRepository for ExpenseStore {
    fn add(&mut self, fields: ExpenseFields) -> Result<Expense, ValidationError> {
        ExpenseStore::add(self, fields)
    }

    fn get_by_id(&self, id: u64) -> Option<Expense> {
        self.get(id).cloned()
    }

    fn get_all(&self) -> Vec<Expense> {
        self.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        ExpenseStore::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn fields(description: &str, amount: Decimal) -> ExpenseFields {
        ExpenseFields::new(
            description,
            amount,
            "General",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut store = ExpenseStore::new();
        let first = store.add(fields("Coffee", dec!(3.50))).unwrap();
        let second = store.add(fields("Lunch", dec!(12))).unwrap();
        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn rejected_insertion_does_not_consume_an_id() {
        let mut store = ExpenseStore::new();
        store.add(fields("Coffee", dec!(3.50))).unwrap();
        store.add(fields("x", dec!(1))).unwrap_err();
        store.add(fields("Refund", dec!(-4))).unwrap_err();
        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), 2);

        let next = store.add(fields("Dinner", dec!(30))).unwrap();
        assert_eq!(next.id(), 2);
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let mut store = ExpenseStore::new();
        store.add(fields("Coffee", dec!(3.50))).unwrap();
        let mut snapshot = ExpenseRepository::get_all(&store);
        snapshot.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lookup_misses_return_none() {
        let mut store = ExpenseStore::new();
        store.add(fields("Coffee", dec!(3.50))).unwrap();
        assert!(store.get(0).is_none());
        assert!(store.get(2).is_none());
        assert_eq!(store.get(1).map(Expense::description), Some("Coffee"));
    }
}
