pub mod callback_controller;
pub mod ipn_controller;

use actix_web::web;

/// Configure callback and IPN routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    callback_controller::configure(cfg);
    ipn_controller::configure(cfg);
}
