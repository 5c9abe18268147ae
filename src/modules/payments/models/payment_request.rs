use crate::core::{AppError, Currency, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_DESCRIPTION: &str = "Payment for services";
pub const DEFAULT_FIRST_NAME: &str = "Customer";
pub const DEFAULT_LAST_NAME: &str = "Name";

/// Payment initiation body posted by the checkout form
///
/// `amount` stays untyped so that a non-numeric value is reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customer: Option<CustomerDetails>,
}

/// Customer contact details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Payment request that passed validation, with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPayment {
    pub amount: Decimal,
    pub currency: Currency,
    pub description: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl PaymentRequest {
    /// Validate the request for the given currency
    ///
    /// # Errors
    /// * `AppError::Validation` - amount missing, non-numeric, non-positive or
    ///   too precise; email missing or malformed
    pub fn validate(&self, currency: Currency) -> Result<ValidatedPayment> {
        let amount = parse_amount(self.amount.as_ref())?;
        currency.validate_amount(amount).map_err(AppError::Validation)?;

        let customer = self.customer.clone().unwrap_or_default();

        let email = trimmed(customer.email)
            .ok_or_else(|| AppError::validation("Customer email is required"))?;
        if !email.contains('@') {
            return Err(AppError::validation("Customer email is invalid"));
        }

        Ok(ValidatedPayment {
            amount,
            currency,
            description: trimmed(self.description.clone())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            email,
            first_name: trimmed(customer.first_name)
                .unwrap_or_else(|| DEFAULT_FIRST_NAME.to_string()),
            last_name: trimmed(customer.last_name)
                .unwrap_or_else(|| DEFAULT_LAST_NAME.to_string()),
            phone_number: trimmed(customer.phone_number).unwrap_or_default(),
        })
    }
}

/// Accepts a JSON number or a numeric string. Digits beyond what a `Decimal`
/// can hold are rejected instead of rounded.
fn parse_amount(value: Option<&Value>) -> Result<Decimal> {
    let raw = match value {
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) => text.trim().to_string(),
        _ => return Err(AppError::validation("Invalid amount")),
    };

    Decimal::from_str_exact(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| AppError::validation("Invalid amount"))
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
