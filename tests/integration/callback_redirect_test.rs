// Integration tests for GET|POST /payment/callback

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::header, test};
use helpers::*;

fn location(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect without Location header")
        .to_str()
        .unwrap()
        .to_string()
}

#[actix_web::test]
async fn test_completed_payment_redirects_to_success() {
    let gateway = FakeGateway::start(GatewayBehavior::default());
    let app = init_app!(test_state(&test_config(&gateway.base_url())));

    let req = test::TestRequest::get()
        .uri(&format!(
            "/payment/callback?OrderTrackingId={}&OrderMerchantReference=ORDER-1",
            FAKE_TRACKING_ID
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);
    assert_eq!(
        location(&resp),
        format!("{}/payment/success?trackingId={}", TEST_BASE_URL, FAKE_TRACKING_ID)
    );
    assert_eq!(
        gateway.calls(),
        vec![
            "/api/Auth/RequestToken",
            "/api/Transactions/GetTransactionStatus",
        ]
    );
}

#[actix_web::test]
async fn test_failed_payment_redirects_with_reason() {
    let gateway = FakeGateway::start(GatewayBehavior {
        status_code: 2,
        status_description: "Insufficient funds".to_string(),
        ..GatewayBehavior::default()
    });
    let app = init_app!(test_state(&test_config(&gateway.base_url())));

    let req = test::TestRequest::get()
        .uri("/payment/callback?OrderTrackingId=track-2&OrderMerchantReference=ORDER-2")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);
    assert_eq!(
        location(&resp),
        format!(
            "{}/payment/failed?trackingId=track-2&reason=Insufficient+funds",
            TEST_BASE_URL
        )
    );
}

#[actix_web::test]
async fn test_reversed_payment_is_not_success() {
    let gateway = FakeGateway::start(GatewayBehavior {
        status_code: 3,
        status_description: String::new(),
        ..GatewayBehavior::default()
    });
    let app = init_app!(test_state(&test_config(&gateway.base_url())));

    let req = test::TestRequest::post()
        .uri("/payment/callback?OrderTrackingId=track-3")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let location = location(&resp);
    assert!(location.starts_with(&format!("{}/payment/failed?", TEST_BASE_URL)));
    assert!(location.contains("trackingId=track-3"));
    assert!(location.contains("reason=Payment+status+REVERSED"));
}

#[actix_web::test]
async fn test_missing_tracking_id_skips_gateway() {
    let gateway = FakeGateway::start(GatewayBehavior::default());
    let app = init_app!(test_state(&test_config(&gateway.base_url())));

    let req = test::TestRequest::get()
        .uri("/payment/callback?OrderMerchantReference=ORDER-1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);
    assert_eq!(
        location(&resp),
        format!("{}/payment?status=failed", TEST_BASE_URL)
    );
    assert!(gateway.calls().is_empty());
}

#[actix_web::test]
async fn test_gateway_outage_redirects_to_failure() {
    let app = init_app!(test_state(&test_config(&unreachable_gateway_url())));

    let req = test::TestRequest::get()
        .uri("/payment/callback?OrderTrackingId=track-4")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);
    let location = location(&resp);
    assert!(location.starts_with(&format!(
        "{}/payment/failed?trackingId=track-4&reason=",
        TEST_BASE_URL
    )));
    assert!(!location.contains(TEST_CONSUMER_SECRET));
}

#[actix_web::test]
async fn test_unverified_callback_trusts_tracking_id() {
    let gateway = FakeGateway::start(GatewayBehavior {
        status_code: 2,
        ..GatewayBehavior::default()
    });
    let mut config = test_config(&gateway.base_url());
    config.pesapal.verify_callbacks = false;
    let app = init_app!(test_state(&config));

    let req = test::TestRequest::get()
        .uri("/payment/callback?OrderTrackingId=track-5")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        location(&resp),
        format!("{}/payment/success?trackingId=track-5", TEST_BASE_URL)
    );
    assert!(gateway.calls().is_empty());
}

#[actix_web::test]
async fn test_result_pages_render_tracking_id() {
    let gateway = FakeGateway::start(GatewayBehavior::default());
    let app = init_app!(test_state(&test_config(&gateway.base_url())));

    let req = test::TestRequest::get()
        .uri("/payment/success?trackingId=track-6")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(body.contains("Payment Successful!"));
    assert!(body.contains("Transaction ID: track-6"));
}

#[actix_web::test]
async fn test_duplicated_tracking_id_redirects_to_landing() {
    let gateway = FakeGateway::start(GatewayBehavior::default());
    let app = init_app!(test_state(&test_config(&gateway.base_url())));

    let req = test::TestRequest::get()
        .uri("/payment/callback?OrderTrackingId=a&OrderTrackingId=b")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);
    assert_eq!(
        location(&resp),
        format!("{}/payment?status=failed", TEST_BASE_URL)
    );
    assert!(gateway.calls().is_empty());
}
