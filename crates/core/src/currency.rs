//! Currency conversion request parsing.
//!
//! The conversion itself is delegated to an external rate service; this
//! module only turns raw query parameters into a checked request.

use crate::error::CoreError;

/// Source currency used when the caller does not name one.
pub const DEFAULT_FROM_CURRENCY: &str = "BRL";

/// Target currency used when the caller does not name one.
pub const DEFAULT_TO_CURRENCY: &str = "USD";

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    /// Build a request from raw query values.
    ///
    /// `amount` is required and must parse as a finite number. Missing or
    /// blank currency codes fall back to the defaults.
    pub fn parse(
        amount: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Self, CoreError> {
        let raw = amount
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::Validation("Parameter 'valor' is required".to_string()))?;

        let amount = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                CoreError::Validation(format!("Parameter 'valor' is not numeric: '{raw}'"))
            })?;

        Ok(Self {
            amount,
            from: currency_or(from, DEFAULT_FROM_CURRENCY),
            to: currency_or(to, DEFAULT_TO_CURRENCY),
        })
    }
}

fn currency_or(code: Option<&str>, default: &str) -> String {
    code.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}
