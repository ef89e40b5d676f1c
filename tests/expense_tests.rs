mod common;

use common::{date, fields};
use expense_core::{Expense, ExpenseFields, ValidationErrorKind};
use rust_decimal_macros::dec;

#[test]
fn valid_expense_keeps_every_field() {
    let expense = Expense::new(
        1,
        ExpenseFields::new("Breakfast", dec!(15.50), "Food", date(2025, 9, 21)),
    )
    .expect("valid expense");

    assert_eq!(expense.id(), 1);
    assert_eq!(expense.description(), "Breakfast");
    assert_eq!(expense.amount(), dec!(15.50));
    assert_eq!(expense.category(), "Food");
    assert_eq!(expense.date(), date(2025, 9, 21));
    assert_eq!(expense.fields().amount.scale(), 2);
}

#[test]
fn negative_amount_is_rejected() {
    let err = Expense::new(2, fields("Invalid", dec!(-100), "Test")).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidAmount);
    assert_eq!(err.field(), "amount");
    assert!(err.to_string().contains("greater than 0"));
}

#[test]
fn short_description_is_rejected() {
    for description in ["", "a", "ab", " a"] {
        let err = Expense::new(3, fields(description, dec!(20), "Test")).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidDescription, "{description:?}");
    }
}

#[test]
fn empty_category_is_rejected() {
    for category in ["", " ", "   ", "\t\n"] {
        let err = Expense::new(4, fields("Category test", dec!(50), category)).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidCategory, "{category:?}");
    }
}

#[test]
fn json_field_set_accepts_text_and_numeric_amounts() {
    let text: ExpenseFields = serde_json::from_str(
        r#"{"description":"Taxi","amount":"20.01","category":"Transport","date":"2025-01-31"}"#,
    )
    .unwrap();
    assert_eq!(text.amount, dec!(20.01));
    assert_eq!(text.date, date(2025, 1, 31));

    let numeric: ExpenseFields = serde_json::from_str(
        r#"{"description":"Taxi","amount":100.01,"category":"Transport","date":"2025-01-31"}"#,
    )
    .unwrap();
    assert_eq!(numeric.amount, dec!(100.01));
}

#[test]
fn serialized_expense_round_trips_through_validation() {
    let expense = Expense::new(9, fields("Museum", dec!(12.75), "Leisure")).unwrap();
    let json = serde_json::to_string(&expense).unwrap();
    let back: Expense = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expense);
}
