use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::config::Config;

use super::{RateError, RateSource};

/// Looks up a rate over HTTP from an endpoint answering
/// `{"rates": {"USD": <number>, ...}}`.
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    client: Client,
    endpoint: String,
    target: String,
}

impl HttpRateSource {
    pub fn new(
        endpoint: impl Into<String>,
        target: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RateError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            target: target.into().to_uppercase(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, RateError> {
        Self::new(
            config.rate_endpoint.clone(),
            config.target_currency.clone(),
            config.rate_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl RateSource for HttpRateSource {
    fn fetch_rate(&self) -> Result<Decimal, RateError> {
        tracing::debug!(endpoint = %self.endpoint, target = %self.target, "fetching rate");
        let response = self.client.get(&self.endpoint).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(RateError::Status(status.as_u16()));
        }
        let body = response.text()?;
        parse_rates_payload(&body, &self.target)
    }
}

#[derive(Deserialize)]
struct RatesPayload {
    #[serde(default)]
    rates: HashMap<String, serde_json::Value>,
}

/// Extracts `rates.<target>` from a rate-lookup response body.
pub fn parse_rates_payload(body: &str, target: &str) -> Result<Decimal, RateError> {
    let payload: RatesPayload = serde_json::from_str(body)?;
    let raw = payload
        .rates
        .get(target)
        .ok_or_else(|| RateError::MissingRate(target.to_string()))?;
    let number = match raw {
        serde_json::Value::Number(number) => number.to_string(),
        other => return Err(RateError::InvalidRate(other.to_string())),
    };
    Decimal::from_str(&number)
        .or_else(|_| Decimal::from_scientific(&number))
        .map_err(|_| RateError::InvalidRate(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn reads_target_rate() {
        let body = r#"{"base":"BRL","rates":{"EUR":0.17,"USD":0.20}}"#;
        assert_eq!(parse_rates_payload(body, "USD").unwrap(), dec!(0.20));
    }

    #[test]
    fn scientific_rates_are_accepted() {
        let body = r#"{"rates":{"USD":2e-1}}"#;
        assert_eq!(parse_rates_payload(body, "USD").unwrap(), dec!(0.2));
    }

    #[test]
    fn missing_key_is_reported() {
        let body = r#"{"rates":{"EUR":0.17}}"#;
        let err = parse_rates_payload(body, "USD").unwrap_err();
        assert!(matches!(err, RateError::MissingRate(ref code) if code == "USD"));

        let err = parse_rates_payload("{}", "USD").unwrap_err();
        assert!(matches!(err, RateError::MissingRate(_)));
    }

    #[test]
    fn non_numeric_rate_is_rejected() {
        let body = r#"{"rates":{"USD":"0.20"}}"#;
        assert!(matches!(
            parse_rates_payload(body, "USD"),
            Err(RateError::InvalidRate(_))
        ));
        assert!(matches!(
            parse_rates_payload("not json", "USD"),
            Err(RateError::Malformed(_))
        ));
    }
}
