//! The expense entity and the raw field set it is built from.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, MIN_DESCRIPTION_LEN};

/// Caller-supplied data for a new expense, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFields {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseFields {
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }
}

/// A single validated spending event.
///
/// Instances only exist once every field constraint holds, and expose no
/// mutators, so a held `Expense` is valid for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedExpense")]
pub struct Expense {
    id: u64,
    description: String,
    amount: Decimal,
    category: String,
    date: NaiveDate,
}

impl Expense {
    /// Validates `fields` and materializes an expense carrying `id`.
    ///
    /// Checks run in order (id, description, amount, category) and the first
    /// failure is returned.
    pub fn new(id: u64, fields: ExpenseFields) -> Result<Self, ValidationError> {
        let ExpenseFields {
            description,
            amount,
            category,
            date,
        } = fields;

        if id == 0 {
            return Err(ValidationError::InvalidId(id));
        }
        if description.chars().count() < MIN_DESCRIPTION_LEN {
            return Err(ValidationError::InvalidDescription(description));
        }
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount(amount));
        }
        if category.trim().is_empty() {
            return Err(ValidationError::InvalidCategory(category));
        }

        Ok(Self {
            id,
            description,
            amount,
            category,
            date,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the field set this expense was built from.
    pub fn fields(&self) -> ExpenseFields {
        ExpenseFields {
            description: self.description.clone(),
            amount: self.amount,
            category: self.category.clone(),
            date: self.date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} [{}] {}",
            self.id, self.date, self.description, self.category, self.amount
        )
    }
}

#[derive(Deserialize)]
struct UncheckedExpense {
    id: u64,
    #[serde(flatten)]
    fields: ExpenseFields,
}

impl TryFrom<UncheckedExpense> for Expense {
    type Error = ValidationError;

    fn try_from(raw: UncheckedExpense) -> Result<Self, Self::Error> {
        Expense::new(raw.id, raw.fields)
    }
}
