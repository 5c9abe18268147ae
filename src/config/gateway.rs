use crate::core::{AppError, Currency, Result};
use std::env;
use std::fmt;

const LIVE_BASE_URL: &str = "https://pay.pesapal.com/v3";
const SANDBOX_BASE_URL: &str = "https://cybqa.pesapal.com/pesapalv3";

/// PesaPal deployment the credentials belong to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GatewayEnvironment {
    #[default]
    Sandbox,
    Live,
}

impl GatewayEnvironment {
    /// Anything other than `live` selects the sandbox.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("live") {
            GatewayEnvironment::Live
        } else {
            GatewayEnvironment::Sandbox
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            GatewayEnvironment::Live => LIVE_BASE_URL,
            GatewayEnvironment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

impl fmt::Display for GatewayEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayEnvironment::Live => write!(f, "live"),
            GatewayEnvironment::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// PesaPal credentials and integration settings
#[derive(Clone)]
pub struct PesapalConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub environment: GatewayEnvironment,
    pub base_url: String,
    pub ipn_id: Option<String>,
    pub ipn_url: Option<String>,
    pub currency: Currency,
    pub verify_callbacks: bool,
}

impl PesapalConfig {
    pub fn from_env() -> Result<Self> {
        let environment = GatewayEnvironment::parse(
            &env::var("PESAPAL_ENVIRONMENT").unwrap_or_default(),
        );

        let currency = match env::var("PESAPAL_CURRENCY") {
            Ok(value) => value.parse().map_err(AppError::Configuration)?,
            Err(_) => Currency::default(),
        };

        let verify_callbacks = match env::var("PESAPAL_VERIFY_CALLBACKS") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                AppError::configuration("Invalid PESAPAL_VERIFY_CALLBACKS")
            })?,
            Err(_) => true,
        };

        Ok(PesapalConfig {
            consumer_key: env::var("PESAPAL_CONSUMER_KEY")
                .map_err(|_| AppError::configuration("PESAPAL_CONSUMER_KEY not set"))?,
            consumer_secret: env::var("PESAPAL_CONSUMER_SECRET")
                .map_err(|_| AppError::configuration("PESAPAL_CONSUMER_SECRET not set"))?,
            environment,
            base_url: env::var("PESAPAL_BASE_URL")
                .unwrap_or_else(|_| environment.base_url().to_string()),
            ipn_id: non_empty(env::var("PESAPAL_IPN_ID").ok()),
            ipn_url: non_empty(env::var("PESAPAL_IPN_URL").ok()),
            currency,
            verify_callbacks,
        })
    }

    /// Sandbox settings pointed at an arbitrary base URL
    pub fn sandbox(consumer_key: &str, consumer_secret: &str, base_url: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            environment: GatewayEnvironment::Sandbox,
            base_url: base_url.trim_end_matches('/').to_string(),
            ipn_id: None,
            ipn_url: None,
            currency: Currency::default(),
            verify_callbacks: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.consumer_key.trim().is_empty() || self.consumer_secret.trim().is_empty() {
            return Err(AppError::configuration("PesaPal credentials must not be empty"));
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(AppError::configuration(format!(
                "Invalid PesaPal base URL: {}",
                self.base_url
            )));
        }

        Ok(())
    }
}

// Credentials stay out of logs.
impl fmt::Debug for PesapalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PesapalConfig")
            .field("consumer_key", &"[redacted]")
            .field("consumer_secret", &"[redacted]")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("ipn_id", &self.ipn_id)
            .field("ipn_url", &self.ipn_url)
            .field("currency", &self.currency)
            .field("verify_callbacks", &self.verify_callbacks)
            .finish()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
