use crate::core::Result;
use crate::modules::callbacks::models::{CallbackOutcome, CallbackQuery, IpnAcknowledgement};
use crate::modules::gateways::{PaymentGateway, TransactionStatusReport};
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_NOTIFICATION_TYPE: &str = "IPNCHANGE";

/// Turns gateway callbacks into outcomes by re-checking transaction status
pub struct CallbackService {
    gateway: Arc<dyn PaymentGateway>,
    verify_callbacks: bool,
}

impl CallbackService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, verify_callbacks: bool) -> Self {
        Self {
            gateway,
            verify_callbacks,
        }
    }

    /// Decide where the returning customer goes
    ///
    /// Never fails: upstream errors become `Failed` with the error as reason.
    pub async fn resolve(&self, query: &CallbackQuery) -> CallbackOutcome {
        let Some(tracking_id) = query.tracking_id() else {
            warn!("Callback without OrderTrackingId");
            return CallbackOutcome::Abandoned;
        };

        if !self.verify_callbacks {
            info!(tracking_id, "Callback accepted without status verification");
            return CallbackOutcome::Succeeded {
                tracking_id: tracking_id.to_string(),
            };
        }

        match self.lookup(tracking_id).await {
            Ok(report) if report.status.is_success() => {
                info!(
                    tracking_id,
                    merchant_reference = ?query.merchant_reference(),
                    confirmation_code = ?report.confirmation_code,
                    "Payment completed"
                );
                CallbackOutcome::Succeeded {
                    tracking_id: tracking_id.to_string(),
                }
            }
            Ok(report) => {
                info!(tracking_id, status = %report.status, "Payment not completed");
                CallbackOutcome::Failed {
                    tracking_id: tracking_id.to_string(),
                    reason: report.reason(),
                }
            }
            Err(e) => {
                warn!(tracking_id, error = %e, "Status verification failed");
                CallbackOutcome::Failed {
                    tracking_id: tracking_id.to_string(),
                    reason: e.reason(),
                }
            }
        }
    }

    /// Reconcile an instant payment notification
    ///
    /// Returns `None` for a probe without a tracking id. The acknowledgement
    /// status is 200 when the status lookup succeeded and 500 otherwise, which
    /// tells the gateway to send the notification again.
    pub async fn acknowledge(&self, query: &CallbackQuery) -> Option<IpnAcknowledgement> {
        let tracking_id = query.tracking_id()?;

        let status = match self.lookup(tracking_id).await {
            Ok(report) => {
                info!(
                    tracking_id,
                    merchant_reference = ?query.merchant_reference(),
                    status = %report.status,
                    amount = ?report.amount,
                    currency = ?report.currency,
                    payment_method = ?report.payment_method,
                    "IPN reconciled"
                );
                200
            }
            Err(e) => {
                warn!(tracking_id, error = %e, "IPN reconciliation failed");
                500
            }
        };

        Some(IpnAcknowledgement {
            order_notification_type: query
                .order_notification_type
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_TYPE.to_string()),
            order_tracking_id: tracking_id.to_string(),
            order_merchant_reference: query.merchant_reference().unwrap_or_default().to_string(),
            status,
        })
    }

    async fn lookup(&self, tracking_id: &str) -> Result<TransactionStatusReport> {
        let token = self.gateway.request_token().await?;
        self.gateway.transaction_status(&token, tracking_id).await
    }
}
