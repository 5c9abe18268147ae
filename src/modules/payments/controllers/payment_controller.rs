use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::warn;

use crate::core::Result;
use crate::modules::payments::models::{PaymentInitiation, PaymentRequest};
use crate::modules::payments::services::PaymentService;

/// Success body returned to the checkout form
#[derive(Debug, Serialize)]
pub struct InitiatePaymentResponse {
    pub success: bool,
    #[serde(flatten)]
    pub initiation: PaymentInitiation,
}

/// Start a hosted checkout
///
/// POST /api/pesapal
///
/// # Returns
/// * `200 OK` - `{success, redirectUrl, trackingId, merchantReference}`
/// * `400 Bad Request` - invalid amount or missing email
/// * `502 Bad Gateway` - token, IPN registration or order submission failed
pub async fn initiate_payment(
    service: web::Data<PaymentService>,
    body: web::Json<PaymentRequest>,
) -> Result<HttpResponse> {
    let initiation = service.initiate(body.into_inner()).await.map_err(|e| {
        warn!(error = %e, "Payment initiation rejected");
        e
    })?;

    Ok(HttpResponse::Ok().json(InitiatePaymentResponse {
        success: true,
        initiation,
    }))
}

/// Configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/pesapal", web::post().to(initiate_payment));
}
