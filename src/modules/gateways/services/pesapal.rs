use super::gateway_trait::PaymentGateway;
use crate::config::PesapalConfig;
use crate::core::{AppError, Result};
use crate::modules::gateways::models::pesapal::{
    IpnRegistrationRequest, IpnRegistrationResponse, OrderResponse, TokenRequest, TokenResponse,
    TransactionStatusResponse,
};
use crate::modules::gateways::models::{
    AccessToken, OrderRequest, SubmittedOrder, TransactionStatus, TransactionStatusReport,
};
use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const TOKEN_TIMEOUT: Duration = Duration::from_secs(10);
const IPN_TIMEOUT: Duration = Duration::from_secs(10);
const ORDER_TIMEOUT: Duration = Duration::from_secs(15);
const STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest upstream body echoed into an error message
const MAX_ERROR_BODY: usize = 512;

/// PesaPal v3 API client
///
/// Implements PaymentGateway for the PesaPal hosted checkout.
/// API Documentation: https://developer.pesapal.com/how-to-integrate/e-commerce/api-30-json/api-reference
pub struct PesapalClient {
    client: Client,
    consumer_key: String,
    consumer_secret: String,
    base_url: String,
}

impl PesapalClient {
    /// Create a new PesaPal client
    ///
    /// # Arguments
    /// * `config` - Credentials and base URL (sandbox, live, or an override)
    pub fn new(config: &PesapalConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pesapay/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the JSON body
    ///
    /// Transport failures, non-2xx statuses and unparsable bodies all become
    /// `AppError::Gateway` naming the operation.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
        timeout: Duration,
    ) -> Result<T> {
        let response = request
            .header(header::ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::gateway(format!(
                        "{}: PesaPal unavailable ({})",
                        operation,
                        if e.is_timeout() {
                            "timeout"
                        } else {
                            "connection failed"
                        }
                    ))
                } else {
                    AppError::gateway(format!("{}: PesaPal request failed: {}", operation, e))
                }
            })?;

        let status_code = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::gateway(format!("{}: failed to read PesaPal response: {}", operation, e))
        })?;

        if !status_code.is_success() {
            return Err(AppError::gateway(format!(
                "{}: PesaPal returned HTTP {} ({})",
                operation,
                status_code.as_u16(),
                truncate(&body)
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(operation, body = %truncate(&body), "Unparsable PesaPal response");
            AppError::gateway(format!("{}: failed to parse PesaPal response: {}", operation, e))
        })
    }
}

#[async_trait]
impl PaymentGateway for PesapalClient {
    async fn request_token(&self) -> Result<AccessToken> {
        const OPERATION: &str = "Authentication failed";

        let request = self
            .client
            .post(self.endpoint("/api/Auth/RequestToken"))
            .json(&TokenRequest {
                consumer_key: &self.consumer_key,
                consumer_secret: &self.consumer_secret,
            });

        let response: TokenResponse = self.send(request, OPERATION, TOKEN_TIMEOUT).await?;

        if let Some(error) = response.error.as_ref().filter(|e| e.is_present()) {
            return Err(AppError::gateway(format!("{}: {}", OPERATION, error.describe())));
        }

        match response.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => {
                debug!(expires = ?response.expiry_date, "Obtained PesaPal access token");
                Ok(AccessToken::new(token))
            }
            None => Err(AppError::gateway(format!(
                "{}: {}",
                OPERATION,
                response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "PesaPal returned empty token".to_string())
            ))),
        }
    }

    async fn register_ipn(&self, token: &AccessToken, url: &str) -> Result<String> {
        const OPERATION: &str = "IPN registration failed";

        let request = self
            .client
            .post(self.endpoint("/api/URLSetup/RegisterIPN"))
            .bearer_auth(token.as_str())
            .json(&IpnRegistrationRequest {
                url,
                ipn_notification_type: "GET",
            });

        let response: IpnRegistrationResponse = self.send(request, OPERATION, IPN_TIMEOUT).await?;

        if let Some(error) = response.error.as_ref().filter(|e| e.is_present()) {
            return Err(AppError::gateway(format!("{}: {}", OPERATION, error.describe())));
        }

        let ipn_id = response
            .ipn_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                AppError::gateway(format!("{}: PesaPal did not return an IPN id", OPERATION))
            })?;

        debug!(ipn_id = %ipn_id, url = ?response.url, "Registered IPN URL");
        Ok(ipn_id)
    }

    async fn submit_order(
        &self,
        token: &AccessToken,
        order: &OrderRequest,
    ) -> Result<SubmittedOrder> {
        const OPERATION: &str = "Order submission failed";

        let request = self
            .client
            .post(self.endpoint("/api/Transactions/SubmitOrderRequest"))
            .bearer_auth(token.as_str())
            .json(order);

        let response: OrderResponse = self.send(request, OPERATION, ORDER_TIMEOUT).await?;

        if let Some(error) = response.error.as_ref().filter(|e| e.is_present()) {
            return Err(AppError::gateway(format!("{}: {}", OPERATION, error.describe())));
        }

        let tracking_id = response
            .order_tracking_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                AppError::gateway(format!(
                    "{}: PesaPal did not return an order tracking ID",
                    OPERATION
                ))
            })?;

        let redirect_url = response
            .redirect_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                AppError::gateway(format!(
                    "{}: PesaPal did not return a redirect URL",
                    OPERATION
                ))
            })?;

        Ok(SubmittedOrder {
            tracking_id,
            merchant_reference: response
                .merchant_reference
                .unwrap_or_else(|| order.id.clone()),
            redirect_url,
        })
    }

    async fn transaction_status(
        &self,
        token: &AccessToken,
        tracking_id: &str,
    ) -> Result<TransactionStatusReport> {
        const OPERATION: &str = "Status lookup failed";

        let request = self
            .client
            .get(self.endpoint("/api/Transactions/GetTransactionStatus"))
            .bearer_auth(token.as_str())
            .query(&[("orderTrackingId", tracking_id)]);

        let response: TransactionStatusResponse =
            self.send(request, OPERATION, STATUS_TIMEOUT).await?;

        if let Some(error) = response.error.as_ref().filter(|e| e.is_present()) {
            return Err(AppError::gateway(format!("{}: {}", OPERATION, error.describe())));
        }

        let status_code = response.status_code.ok_or_else(|| {
            AppError::gateway(format!("{}: PesaPal did not return a status code", OPERATION))
        })?;

        Ok(TransactionStatusReport {
            status: TransactionStatus::from_code(status_code),
            description: response
                .payment_status_description
                .filter(|d| !d.trim().is_empty())
                .or(response.description),
            merchant_reference: response.merchant_reference,
            confirmation_code: response.confirmation_code,
            payment_method: response.payment_method,
            amount: response.amount.map(|n| n.to_string()),
            currency: response.currency,
        })
    }

    fn name(&self) -> &str {
        "pesapal"
    }
}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }

    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
