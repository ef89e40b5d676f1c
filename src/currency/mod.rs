//! Currency conversion boundary.
//!
//! The core only ever sees an [`ExpenseConverter`]: something that maps an
//! expense to an optional converted amount. Rate retrieval sits behind
//! [`RateSource`], with [`HttpRateSource`] as the network-backed implementation.

pub mod http;

pub use http::{parse_rates_payload, HttpRateSource};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::domain::Expense;

/// Decimal places kept on converted amounts.
pub const CONVERTED_SCALE: u32 = 2;

/// Failure while looking up an exchange rate.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("rate lookup failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rate lookup returned HTTP {0}")]
    Status(u16),
    #[error("rate payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("rate payload has no `{0}` rate")]
    MissingRate(String),
    #[error("rate `{0}` is not a decimal number")]
    InvalidRate(String),
}

/// Source of the exchange rate applied to expense amounts.
pub trait RateSource {
    fn fetch_rate(&self) -> Result<Decimal, RateError>;
}

impl<F> RateSource for F
where
    F: Fn() -> Result<Decimal, RateError>,
{
    fn fetch_rate(&self) -> Result<Decimal, RateError> {
        self()
    }
}

/// Maps an expense to its converted amount, or `None` when no rate is available.
pub trait ExpenseConverter {
    fn convert(&self, expense: &Expense) -> Option<Decimal>;
}

impl<F> ExpenseConverter for F
where
    F: Fn(&Expense) -> Option<Decimal>,
{
    fn convert(&self, expense: &Expense) -> Option<Decimal> {
        self(expense)
    }
}

/// Applies the rate from `S` to an expense amount.
#[derive(Debug, Clone)]
pub struct RateConverter<S> {
    source: S,
}

impl<S: RateSource> RateConverter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: RateSource> ExpenseConverter for RateConverter<S> {
    fn convert(&self, expense: &Expense) -> Option<Decimal> {
        match self.source.fetch_rate() {
            Ok(rate) => match apply_rate(expense.amount(), rate) {
                Some(converted) => {
                    tracing::debug!(id = expense.id(), %rate, %converted, "expense converted");
                    Some(converted)
                }
                None => {
                    tracing::warn!(id = expense.id(), %rate, "converted amount overflows");
                    None
                }
            },
            Err(err) => {
                tracing::warn!(id = expense.id(), error = %err, "conversion unavailable");
                None
            }
        }
    }
}

/// `amount × rate`, rounded half-to-even to [`CONVERTED_SCALE`] places.
///
/// Returns `None` when the product does not fit in a [`Decimal`].
pub fn apply_rate(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    let product = amount.checked_mul(rate)?;
    Some(product.round_dp_with_strategy(CONVERTED_SCALE, RoundingStrategy::MidpointNearestEven))
}
