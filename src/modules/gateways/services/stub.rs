//! In-process gateway used by unit tests.

use super::gateway_trait::PaymentGateway;
use crate::core::{AppError, Result};
use crate::modules::gateways::models::{
    AccessToken, OrderRequest, SubmittedOrder, TransactionStatus, TransactionStatusReport,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct StubGateway {
    pub fail_token: bool,
    pub fail_order: bool,
    pub fail_status: bool,
    pub status_code: i64,
    pub calls: AtomicUsize,
    pub ipn_registrations: AtomicUsize,
    pub submitted: Mutex<Vec<OrderRequest>>,
}

impl StubGateway {
    pub fn completing() -> Self {
        Self {
            status_code: 1,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn request_token(&self) -> Result<AccessToken> {
        self.record();
        if self.fail_token {
            return Err(AppError::gateway(
                "Authentication failed: invalid_consumer_key_or_secret_provided",
            ));
        }
        Ok(AccessToken::new("stub-token"))
    }

    async fn register_ipn(&self, _token: &AccessToken, _url: &str) -> Result<String> {
        self.record();
        self.ipn_registrations.fetch_add(1, Ordering::SeqCst);
        Ok("stub-ipn-id".to_string())
    }

    async fn submit_order(
        &self,
        _token: &AccessToken,
        order: &OrderRequest,
    ) -> Result<SubmittedOrder> {
        self.record();
        if self.fail_order {
            return Err(AppError::gateway("Order submission failed: invalid amount"));
        }
        if let Ok(mut submitted) = self.submitted.lock() {
            submitted.push(order.clone());
        }
        Ok(SubmittedOrder {
            tracking_id: "stub-tracking-id".to_string(),
            merchant_reference: order.id.clone(),
            redirect_url: "https://checkout.example.com/iframe?OrderTrackingId=stub-tracking-id"
                .to_string(),
        })
    }

    async fn transaction_status(
        &self,
        _token: &AccessToken,
        _tracking_id: &str,
    ) -> Result<TransactionStatusReport> {
        self.record();
        if self.fail_status {
            return Err(AppError::gateway("Status lookup failed: PesaPal unavailable (timeout)"));
        }
        let status = TransactionStatus::from_code(self.status_code);
        Ok(TransactionStatusReport {
            status,
            description: (!status.is_success()).then(|| "Insufficient funds".to_string()),
            merchant_reference: Some("ORDER-1".to_string()),
            confirmation_code: None,
            payment_method: Some("MpesaKE".to_string()),
            amount: Some("100".to_string()),
            currency: Some("KES".to_string()),
        })
    }

    fn name(&self) -> &str {
        "stub"
    }
}
