use crate::core::Result;
use crate::modules::gateways::models::{
    AccessToken, OrderRequest, SubmittedOrder, TransactionStatusReport,
};
use async_trait::async_trait;

/// Hosted-checkout payment gateway
///
/// Each call is a single outbound request. Tokens are passed in explicitly so
/// callers decide their lifetime; nothing here caches or retries.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Exchange the consumer credentials for a bearer token
    async fn request_token(&self) -> Result<AccessToken>;

    /// Register a notification URL and return its notification id
    async fn register_ipn(&self, token: &AccessToken, url: &str) -> Result<String>;

    /// Submit an order and return the tracking id and checkout redirect
    async fn submit_order(&self, token: &AccessToken, order: &OrderRequest)
        -> Result<SubmittedOrder>;

    /// Look up the current status of an order
    async fn transaction_status(
        &self,
        token: &AccessToken,
        tracking_id: &str,
    ) -> Result<TransactionStatusReport>;

    /// Get gateway name
    fn name(&self) -> &str;
}
