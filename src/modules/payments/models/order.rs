use super::payment_request::ValidatedPayment;
use crate::modules::gateways::{BillingAddress, OrderRequest};
use serde::Serialize;

/// Merchant reference for a new order: `ORDER-<unix millis>-<8 hex>`
pub fn generate_order_id() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "ORDER-{}-{}",
        chrono::Utc::now().timestamp_millis(),
        &suffix[..8]
    )
}

/// Build the gateway order for a validated payment
pub fn build_order(
    payment: &ValidatedPayment,
    callback_url: &str,
    notification_id: &str,
) -> OrderRequest {
    OrderRequest {
        id: generate_order_id(),
        currency: payment.currency.to_string(),
        amount: payment.amount,
        description: payment.description.clone(),
        callback_url: callback_url.to_string(),
        notification_id: notification_id.to_string(),
        billing_address: BillingAddress {
            email_address: payment.email.clone(),
            phone_number: payment.phone_number.clone(),
            first_name: payment.first_name.clone(),
            last_name: payment.last_name.clone(),
        },
    }
}

/// Successful initiation returned to the checkout form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitiation {
    pub redirect_url: String,
    pub tracking_id: String,
    pub merchant_reference: String,
}
