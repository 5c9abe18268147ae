use actix_web::{http::header::ContentType, web, HttpResponse};
use serde::Deserialize;

use crate::core::Currency;
use crate::modules::pages::templates;

#[derive(Debug, Default, Deserialize)]
pub struct FormQuery {
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultQuery {
    pub tracking_id: Option<String>,
    pub reason: Option<String>,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// GET / and GET /payment
pub async fn payment_form(
    query: web::Query<FormQuery>,
    currency: web::Data<Currency>,
) -> HttpResponse {
    let failed = query.status.as_deref() == Some("failed");
    html(templates::payment_form(*currency.get_ref(), failed))
}

/// GET /payment/success?trackingId=..
pub async fn payment_success(query: web::Query<ResultQuery>) -> HttpResponse {
    html(templates::payment_success(query.tracking_id.as_deref()))
}

/// GET /payment/failed?reason=..&trackingId=..
pub async fn payment_failed(query: web::Query<ResultQuery>) -> HttpResponse {
    html(templates::payment_failed(
        query.reason.as_deref(),
        query.tracking_id.as_deref(),
    ))
}

/// Configure page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(payment_form))
        .route("/payment", web::get().to(payment_form))
        .route("/payment/success", web::get().to(payment_success))
        .route("/payment/failed", web::get().to(payment_failed));
}
