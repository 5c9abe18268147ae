use actix_web::{http::header, web, HttpResponse};
use tracing::{info, warn};

use crate::modules::callbacks::models::{CallbackOutcome, CallbackQuery, RedirectTargets};
use crate::modules::callbacks::services::CallbackService;

/// Browser return from the hosted checkout
///
/// GET|POST /payment/callback?OrderTrackingId=..&OrderMerchantReference=..
///
/// Always answers `302 Found`: to the success page, the failure page with a
/// reason, or the payment landing page when no tracking id was supplied or
/// the query string could not be read.
pub async fn payment_callback(
    query: Result<web::Query<CallbackQuery>, actix_web::Error>,
    service: web::Data<CallbackService>,
    targets: web::Data<RedirectTargets>,
) -> HttpResponse {
    let outcome = match query {
        Ok(query) => service.resolve(&query).await,
        Err(err) => {
            warn!(error = %err, "Unreadable callback query");
            CallbackOutcome::Abandoned
        }
    };
    let location = targets.location(&outcome);

    info!(success = outcome.is_success(), location = %location, "Redirecting callback");

    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Configure callback routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/payment/callback")
            .route(web::get().to(payment_callback))
            .route(web::post().to(payment_callback)),
    );
}
