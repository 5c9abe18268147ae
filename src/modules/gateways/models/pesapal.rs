use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bearer token issued by `Auth/RequestToken`
///
/// Fetched for every inbound request and never reused.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([redacted])")
    }
}

/// Error object embedded in PesaPal response bodies
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayErrorBody {
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GatewayErrorBody {
    /// PesaPal sends an empty error object on success.
    pub fn is_present(&self) -> bool {
        [&self.error_type, &self.code, &self.message]
            .into_iter()
            .flatten()
            .any(|value| !value.trim().is_empty())
    }

    pub fn describe(&self) -> String {
        [&self.message, &self.code, &self.error_type]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| "unknown gateway error".to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub consumer_key: &'a str,
    pub consumer_secret: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "expiryDate")]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub error: Option<GatewayErrorBody>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IpnRegistrationRequest<'a> {
    pub url: &'a str,
    pub ipn_notification_type: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct IpnRegistrationResponse {
    #[serde(default)]
    pub ipn_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<GatewayErrorBody>,
}

/// Order payload for `Transactions/SubmitOrderRequest`
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub id: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub description: String,
    pub callback_url: String,
    pub notification_id: String,
    pub billing_address: BillingAddress,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillingAddress {
    pub email_address: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub order_tracking_id: Option<String>,
    #[serde(default)]
    pub merchant_reference: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub error: Option<GatewayErrorBody>,
}

/// Order accepted by the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedOrder {
    pub tracking_id: String,
    pub merchant_reference: String,
    pub redirect_url: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionStatusResponse {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub payment_status_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub merchant_reference: Option<String>,
    #[serde(default)]
    pub confirmation_code: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub amount: Option<serde_json::Number>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub error: Option<GatewayErrorBody>,
}

/// Outcome of a transaction according to `GetTransactionStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Invalid,
    Completed,
    Failed,
    Reversed,
    Unknown(i64),
}

impl TransactionStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => TransactionStatus::Invalid,
            1 => TransactionStatus::Completed,
            2 => TransactionStatus::Failed,
            3 => TransactionStatus::Reversed,
            other => TransactionStatus::Unknown(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TransactionStatus::Completed)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Invalid => write!(f, "INVALID"),
            TransactionStatus::Completed => write!(f, "COMPLETED"),
            TransactionStatus::Failed => write!(f, "FAILED"),
            TransactionStatus::Reversed => write!(f, "REVERSED"),
            TransactionStatus::Unknown(code) => write!(f, "UNKNOWN ({})", code),
        }
    }
}

/// Status lookup result
#[derive(Debug, Clone)]
pub struct TransactionStatusReport {
    pub status: TransactionStatus,
    pub description: Option<String>,
    pub merchant_reference: Option<String>,
    pub confirmation_code: Option<String>,
    pub payment_method: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
}

impl TransactionStatusReport {
    /// Human readable explanation for a non-successful transaction
    pub fn reason(&self) -> String {
        self.description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("Payment status {}", self.status))
    }
}
