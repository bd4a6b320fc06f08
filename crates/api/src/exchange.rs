//! Exchange-rate lookup against a Frankfurter-compatible HTTP API.
//!
//! [`ExchangeClient`] performs a single `GET {base}/latest` request per
//! conversion. There is no retry; any transport failure or non-2xx status
//! is reported as [`ExchangeError`] and surfaced to callers as an upstream
//! error.

use std::collections::HashMap;
use std::time::Duration;

use portfolio_core::currency::ConversionRequest;
use portfolio_core::error::CoreError;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for exchange-rate lookups.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// The underlying HTTP request failed (network, DNS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The rate service returned a non-2xx status code.
    #[error("Exchange service returned HTTP {0}")]
    HttpStatus(u16),
}

impl From<ExchangeError> for CoreError {
    fn from(err: ExchangeError) -> Self {
        CoreError::Upstream(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Subset of the `/latest` response we consume.
#[derive(Debug, Deserialize)]
struct LatestRates {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// Result of a conversion, in the API's response vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    #[serde(rename = "valor_original")]
    pub amount: f64,
    #[serde(rename = "de")]
    pub from: String,
    #[serde(rename = "para")]
    pub to: String,
    /// `None` when the service does not quote the target currency.
    #[serde(rename = "valor_convertido")]
    pub converted: Option<f64>,
}

// ---------------------------------------------------------------------------
// ExchangeClient
// ---------------------------------------------------------------------------

/// HTTP client for the exchange-rate service.
pub struct ExchangeClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExchangeClient {
    /// Create a client for `base_url` (e.g. `https://api.frankfurter.app`)
    /// with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ExchangeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Convert `request.amount` from `request.from` to `request.to`.
    pub async fn convert(&self, request: &ConversionRequest) -> Result<Conversion, ExchangeError> {
        let response = self.client.execute(self.build_request(request)?).await?;

        if !response.status().is_success() {
            return Err(ExchangeError::HttpStatus(response.status().as_u16()));
        }

        let latest: LatestRates = response.json().await?;
        Ok(Conversion {
            amount: request.amount,
            from: request.from.clone(),
            to: request.to.clone(),
            converted: latest.rates.get(&request.to).copied(),
        })
    }

    fn build_request(&self, request: &ConversionRequest) -> Result<reqwest::Request, reqwest::Error> {
        self.client
            .get(format!("{}/latest", self.base_url))
            .query(&[
                ("amount", request.amount.to_string()),
                ("from", request.from.clone()),
                ("to", request.to.clone()),
            ])
            .build()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
