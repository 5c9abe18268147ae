use crate::config::AppConfig;
use crate::core::Result;
use reqwest::Url;
use serde::{Deserialize, Serialize};

pub const SUCCESS_PATH: &str = "/payment/success";
pub const FAILURE_PATH: &str = "/payment/failed";
pub const LANDING_PATH: &str = "/payment";

/// Parameters the gateway appends to callback and IPN URLs
///
/// Also accepted as a JSON body when an IPN is registered as POST.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    #[serde(rename = "OrderTrackingId", default)]
    pub order_tracking_id: Option<String>,
    #[serde(rename = "OrderMerchantReference", default)]
    pub order_merchant_reference: Option<String>,
    #[serde(rename = "OrderNotificationType", default)]
    pub order_notification_type: Option<String>,
}

impl CallbackQuery {
    pub fn tracking_id(&self) -> Option<&str> {
        non_blank(&self.order_tracking_id)
    }

    pub fn merchant_reference(&self) -> Option<&str> {
        non_blank(&self.order_merchant_reference)
    }

    /// Fill fields missing here from `other`
    pub fn merge(self, other: CallbackQuery) -> CallbackQuery {
        CallbackQuery {
            order_tracking_id: self.order_tracking_id.or(other.order_tracking_id),
            order_merchant_reference: self
                .order_merchant_reference
                .or(other.order_merchant_reference),
            order_notification_type: self
                .order_notification_type
                .or(other.order_notification_type),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Where a returning customer ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    Succeeded { tracking_id: String },
    Failed { tracking_id: String, reason: String },
    /// No tracking id; nothing to verify
    Abandoned,
}

impl CallbackOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CallbackOutcome::Succeeded { .. })
    }
}

/// Absolute redirect targets for callback outcomes
#[derive(Debug, Clone)]
pub struct RedirectTargets {
    success: Url,
    failure: Url,
    landing: Url,
}

impl RedirectTargets {
    pub fn from_config(app: &AppConfig) -> Result<Self> {
        Ok(Self {
            success: app.url_for(SUCCESS_PATH)?,
            failure: app.url_for(FAILURE_PATH)?,
            landing: app.url_for(LANDING_PATH)?,
        })
    }

    /// Redirect location for an outcome, with query values percent-encoded
    pub fn location(&self, outcome: &CallbackOutcome) -> String {
        match outcome {
            CallbackOutcome::Succeeded { tracking_id } => {
                let mut url = self.success.clone();
                url.query_pairs_mut().append_pair("trackingId", tracking_id);
                url.to_string()
            }
            CallbackOutcome::Failed {
                tracking_id,
                reason,
            } => {
                let mut url = self.failure.clone();
                url.query_pairs_mut()
                    .append_pair("trackingId", tracking_id)
                    .append_pair("reason", reason);
                url.to_string()
            }
            CallbackOutcome::Abandoned => {
                let mut url = self.landing.clone();
                url.query_pairs_mut().append_pair("status", "failed");
                url.to_string()
            }
        }
    }
}

/// Acknowledgement body PesaPal expects from an IPN endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpnAcknowledgement {
    pub order_notification_type: String,
    pub order_tracking_id: String,
    pub order_merchant_reference: String,
    pub status: u16,
}
