use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::modules::callbacks::models::CallbackQuery;
use crate::modules::callbacks::services::CallbackService;

/// Reply to a URL probe that carries no notification
#[derive(Debug, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub message: String,
}

/// Instant payment notification from the gateway
///
/// GET|POST /api/pesapal/callback
///
/// Parameters come from the query string; a POST may also carry them as a
/// JSON body. Without a tracking id, or with an unreadable query string and
/// no body, the request is treated as a URL probe.
pub async fn payment_notification(
    query: Result<web::Query<CallbackQuery>, actix_web::Error>,
    body: Option<web::Json<CallbackQuery>>,
    service: web::Data<CallbackService>,
) -> HttpResponse {
    let query = query.map(web::Query::into_inner).unwrap_or_else(|err| {
        warn!(error = %err, "Unreadable IPN query");
        CallbackQuery::default()
    });
    let notification = match body {
        Some(body) => query.merge(body.into_inner()),
        None => query,
    };

    match service.acknowledge(&notification).await {
        Some(ack) => {
            info!(
                tracking_id = %ack.order_tracking_id,
                status = ack.status,
                "Acknowledging IPN"
            );
            HttpResponse::Ok().json(ack)
        }
        None => HttpResponse::Ok().json(ProbeResponse {
            message: "Callback URL is valid".to_string(),
        }),
    }
}

/// Configure IPN routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/pesapal/callback")
            .route(web::get().to(payment_notification))
            .route(web::post().to(payment_notification)),
    );
}
