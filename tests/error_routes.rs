use axum::{
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use smartwake::test_helpers::test_app;

async fn send(request: Request<Body>) -> Response {
    test_app().await.oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn unknown_route_returns_json_envelope() {
    let response = send(
        Request::builder()
            .uri("/api/wakeups")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["status"], 404);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn update_on_collection_root_is_method_not_allowed() {
    for method in ["PUT", "PATCH"] {
        let response = send(
            Request::builder()
                .method(method)
                .uri("/api/alarms")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "id": "a1" }).to_string()))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key(header::ALLOW));

        let body = json_body(response).await;
        assert_eq!(body["status"], 405);
    }
}

#[tokio::test]
async fn patch_with_unsupported_content_type_is_rejected() {
    let response = send(
        Request::builder()
            .method("PATCH")
            .uri("/api/alarms/a1")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(json!({ "id": "a1" }).to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let body = json_body(response).await;
    assert_eq!(body["status"], 415);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let response = send(
        Request::builder()
            .method("POST")
            .uri("/api/alarms")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"sound\":"))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["status"], 400);
}

#[tokio::test]
async fn mistyped_field_is_reported_as_bad_request() {
    let response = send(
        Request::builder()
            .method("POST")
            .uri("/api/alarms")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "snoozeDuration": "five" }).to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["message"].as_str().unwrap().contains("snoozeDuration"));
}

#[tokio::test]
async fn missing_content_type_on_create_is_unsupported() {
    let response = send(
        Request::builder()
            .method("POST")
            .uri("/api/user-logins")
            .body(Body::from(json!({ "username": "a", "password": "b" }).to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json_body(response).await["status"], 415);
}
