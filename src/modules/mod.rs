pub mod callbacks;
pub mod gateways;
pub mod health;
pub mod pages;
pub mod payments;

use actix_web::web;
use std::sync::Arc;

use crate::config::{Config, GatewayEnvironment};
use crate::core::{Currency, Result};
use crate::middleware::{json_error_handler, query_error_handler};
use callbacks::{CallbackService, RedirectTargets};
use gateways::{PaymentGateway, PesapalClient};
use payments::{PaymentService, PaymentSettings};

/// Handler state built once at startup and shared by every worker
#[derive(Clone)]
pub struct AppState {
    pub payments: web::Data<PaymentService>,
    pub callbacks: web::Data<CallbackService>,
    pub targets: web::Data<RedirectTargets>,
    pub currency: web::Data<Currency>,
    pub environment: web::Data<GatewayEnvironment>,
}

impl AppState {
    /// State backed by the PesaPal API described in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let gateway: Arc<dyn PaymentGateway> = Arc::new(PesapalClient::new(&config.pesapal)?);
        Self::new(config, gateway)
    }

    pub fn new(config: &Config, gateway: Arc<dyn PaymentGateway>) -> Result<Self> {
        Ok(Self {
            payments: web::Data::new(PaymentService::new(
                gateway.clone(),
                PaymentSettings::from_config(config)?,
            )),
            callbacks: web::Data::new(CallbackService::new(
                gateway,
                config.pesapal.verify_callbacks,
            )),
            targets: web::Data::new(RedirectTargets::from_config(&config.app)?),
            currency: web::Data::new(config.pesapal.currency),
            environment: web::Data::new(config.pesapal.environment),
        })
    }
}

/// Register shared state, extractor error handlers and every route
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(state.payments.clone())
        .app_data(state.callbacks.clone())
        .app_data(state.targets.clone())
        .app_data(state.currency.clone())
        .app_data(state.environment.clone())
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    health::configure(cfg);
    payments::configure(cfg);
    callbacks::configure(cfg);
    pages::configure(cfg);
}
