#![allow(dead_code)]

use chrono::NaiveDate;
use expense_core::ExpenseFields;
use rust_decimal::Decimal;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// A valid field set with the given amount.
pub fn fields_with_amount(amount: Decimal) -> ExpenseFields {
    ExpenseFields::new("Groceries", amount, "Food", date(2025, 9, 21))
}

pub fn fields(description: &str, amount: Decimal, category: &str) -> ExpenseFields {
    ExpenseFields::new(description, amount, category, date(2025, 9, 21))
}
