mod common;

use common::{fields, fields_with_amount};
use expense_core::{
    CostTier, Expense, ExpenseManager, ExpenseRepository, ExpenseStore, SharedExpenseStore,
    ValidationErrorKind,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn empty_store_totals_zero() {
    let mut store = ExpenseStore::new();
    let manager = ExpenseManager::new(&mut store);
    assert_eq!(manager.get_total_expenses(), Decimal::ZERO);
    assert_eq!(format!("{:.2}", manager.get_total_expenses()), "0.00");
}

#[test]
fn total_is_exact() {
    let mut store = ExpenseStore::new();
    let mut manager = ExpenseManager::new(&mut store);
    for amount in [dec!(10.50), dec!(20.00), dec!(0.50)] {
        manager.add_expense(fields_with_amount(amount)).unwrap();
    }
    assert_eq!(manager.get_total_expenses(), dec!(31.00));
}

#[test]
fn total_saturates_instead_of_overflowing() {
    let mut store = ExpenseStore::new();
    let mut manager = ExpenseManager::new(&mut store);
    manager.add_expense(fields_with_amount(Decimal::MAX)).unwrap();
    manager.add_expense(fields_with_amount(Decimal::MAX)).unwrap();
    assert_eq!(manager.get_total_expenses(), Decimal::MAX);
    assert_eq!(manager.list_expenses().len(), 2);
}

#[test]
fn total_reflects_store_changes_made_elsewhere() {
    let shared = SharedExpenseStore::new();
    let manager = ExpenseManager::new(shared.clone());
    let mut writer = shared.clone();
    writer.add(fields_with_amount(dec!(0.10))).unwrap();
    writer.add(fields_with_amount(dec!(0.20))).unwrap();
    assert_eq!(manager.get_total_expenses(), dec!(0.30));
    assert_eq!(manager.list_expenses().len(), 2);
}

#[test]
fn add_expense_delegates_to_store() {
    let mut store = ExpenseStore::new();
    let mut manager = ExpenseManager::new(&mut store);
    let first = manager.add_expense(fields("Cinema", dec!(25), "Leisure")).unwrap();
    let err = manager.add_expense(fields("no", dec!(25), "Leisure")).unwrap_err();
    let second = manager.add_expense(fields("Popcorn", dec!(8), "Leisure")).unwrap();

    assert_eq!(err.kind(), ValidationErrorKind::InvalidDescription);
    assert_eq!((first.id(), second.id()), (1, 2));
    assert_eq!(manager.get_expense(2), Some(second));
    assert_eq!(manager.get_expense(3), None);
    assert_eq!(manager.store().len(), 2);
}

#[test]
fn classification_boundaries() {
    let mut store = ExpenseStore::new();
    let manager = ExpenseManager::new(&mut store);
    let cases = [
        (dec!(0.01), CostTier::Low),
        (dec!(20.00), CostTier::Low),
        (dec!(20.01), CostTier::Medium),
        (dec!(100.00), CostTier::Medium),
        (dec!(100.01), CostTier::High),
        (dec!(1000000), CostTier::High),
    ];
    for (amount, expected) in cases {
        let expense = Expense::new(1, fields_with_amount(amount)).unwrap();
        assert_eq!(
            manager.categorize_expense_by_cost(&expense),
            expected,
            "amount {amount}"
        );
    }
}
