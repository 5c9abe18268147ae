use crate::core::{AppError, Result};
use reqwest::Url;
use std::env;

pub mod gateway;
pub mod server;

pub use gateway::{GatewayEnvironment, PesapalConfig};
pub use server::ServerConfig;

/// Browser callback path registered with every order
pub const CALLBACK_PATH: &str = "/payment/callback";
/// IPN endpoint path registered with the gateway
pub const IPN_PATH: &str = "/api/pesapal/callback";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub pesapal: PesapalConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Public origin of this service, used for callback and page redirects
    pub base_url: Url,
}

impl AppConfig {
    pub fn new(env: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            env: env.to_string(),
            log_level: "info".to_string(),
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }

    /// Absolute URL for a path on this service
    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::configuration(format!("Invalid path {}: {}", path, e)))
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let base_url = env::var("APP_BASE_URL")
            .map_err(|_| AppError::configuration("APP_BASE_URL not set"))?;

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                base_url: parse_base_url(&base_url)?,
            },
            server: ServerConfig::from_env()?,
            pesapal: PesapalConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.app.base_url.scheme(), "http" | "https") {
            return Err(AppError::configuration(
                "APP_BASE_URL must be an http(s) URL",
            ));
        }

        if self.server.port == 0 {
            return Err(AppError::configuration("SERVER_PORT must be greater than 0"));
        }

        self.pesapal.validate()
    }

    /// URL the gateway sends the customer back to after checkout
    pub fn callback_url(&self) -> Result<Url> {
        self.app.url_for(CALLBACK_PATH)
    }

    /// URL registered with the gateway for instant payment notifications
    pub fn ipn_url(&self) -> Result<Url> {
        match &self.pesapal.ipn_url {
            Some(url) => Url::parse(url)
                .map_err(|e| AppError::configuration(format!("Invalid PESAPAL_IPN_URL: {}", e))),
            None => self.app.url_for(IPN_PATH),
        }
    }
}

fn parse_base_url(value: &str) -> Result<Url> {
    Url::parse(value.trim())
        .map_err(|e| AppError::configuration(format!("Invalid APP_BASE_URL: {}", e)))
}
