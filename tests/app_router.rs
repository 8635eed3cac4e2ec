mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use order_intake::routes::app_router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower::ServiceExt;

fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Serves the full router over a real socket, the way `server::run` does,
/// so the per-IP limiter sees a peer address.
fn connected_server() -> (TestServer, std::sync::Arc<common::InMemoryOrderRepository>) {
    let (state, _customers, orders) = common::create_default_state();
    let app = axum::ServiceExt::<Request<Body>>::into_make_service_with_connect_info::<SocketAddr>(
        app_router(state, &static_dir()),
    );

    let server = TestServer::builder().http_transport().build(app).unwrap();
    (server, orders)
}

const ORDER_FORM: [(&str, &str); 3] = [
    ("name", "Asha"),
    ("phoneNumber", "(555) 123-4567"),
    ("Dosa", "2"),
];

#[tokio::test]
async fn test_submit_through_router_renders_summary() {
    let (server, orders) = connected_server();

    let response = server.post("/submit").form(&ORDER_FORM).await;

    response.assert_status_ok();
    assert!(response.text().contains("<p>$61.98</p>"));
    assert_eq!(orders.lines.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_submit_beyond_burst_is_rate_limited() {
    let (server, orders) = connected_server();

    for _ in 0..20 {
        server.post("/submit").form(&ORDER_FORM).await.assert_status_ok();
    }

    let response = server.post("/submit").form(&ORDER_FORM).expect_failure().await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(orders.lines.lock().unwrap().len(), 20);
}

#[tokio::test]
async fn test_submit_without_peer_address_is_internal_error() {
    let (state, _customers, orders) = common::create_default_state();
    let app = app_router(state, &static_dir());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("name=Asha&phoneNumber=5551234567&Dosa=2"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Internal Server Error");
    assert!(orders.lines.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_root_serves_order_form() {
    let (state, _customers, _orders) = common::create_default_state();
    let app = app_router(state, &static_dir());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(r#"action="/submit""#));
    assert!(html.contains(r#"name="phoneNumber""#));
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let (state, _customers, _orders) = common::create_default_state();
    let app = app_router(state, &static_dir());

    let response = app
        .oneshot(Request::builder().uri("/menu/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let (state, _customers, _orders) = common::create_default_state();
    let app = app_router(state, &static_dir());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (state, _customers, _orders) = common::create_default_state();
    let app = app_router(state, &static_dir());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
