use crate::config::Config;
use crate::core::{Currency, Result};
use crate::modules::gateways::PaymentGateway;
use crate::modules::payments::models::{build_order, PaymentInitiation, PaymentRequest};
use std::sync::Arc;
use tracing::{error, info};

/// Settings the initiation flow needs from configuration
#[derive(Debug, Clone)]
pub struct PaymentSettings {
    pub currency: Currency,
    pub callback_url: String,
    pub ipn_url: String,
    /// Pre-registered notification id; when absent the IPN URL is registered per request
    pub ipn_id: Option<String>,
}

impl PaymentSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            currency: config.pesapal.currency,
            callback_url: config.callback_url()?.to_string(),
            ipn_url: config.ipn_url()?.to_string(),
            ipn_id: config.pesapal.ipn_id.clone(),
        })
    }
}

/// Payment initiation: token, IPN registration, order submission
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
    settings: PaymentSettings,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, settings: PaymentSettings) -> Self {
        Self { gateway, settings }
    }

    /// Validate the request and obtain a hosted checkout redirect
    ///
    /// Validation happens before any gateway call. Gateway failures are
    /// returned as-is; nothing is retried.
    pub async fn initiate(&self, request: PaymentRequest) -> Result<PaymentInitiation> {
        let payment = request.validate(self.settings.currency)?;

        let token = self.gateway.request_token().await?;

        let notification_id = match &self.settings.ipn_id {
            Some(id) => id.clone(),
            None => {
                let id = self
                    .gateway
                    .register_ipn(&token, &self.settings.ipn_url)
                    .await?;
                info!(ipn_id = %id, "Registered notification URL");
                id
            }
        };

        let order = build_order(&payment, &self.settings.callback_url, &notification_id);

        info!(
            gateway = self.gateway.name(),
            order_id = %order.id,
            amount = %order.amount,
            currency = %order.currency,
            "Submitting order"
        );

        match self.gateway.submit_order(&token, &order).await {
            Ok(submitted) => {
                info!(
                    order_id = %order.id,
                    tracking_id = %submitted.tracking_id,
                    "Order accepted by gateway"
                );
                Ok(PaymentInitiation {
                    redirect_url: submitted.redirect_url,
                    tracking_id: submitted.tracking_id,
                    merchant_reference: submitted.merchant_reference,
                })
            }
            Err(e) => {
                error!(order_id = %order.id, error = %e, "Order submission failed");
                Err(e)
            }
        }
    }
}
