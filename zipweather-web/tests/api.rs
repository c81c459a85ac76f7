//! Router-level tests for the web surface. These cover the request/response
//! contract that never reaches the provider; the resolution pipeline itself
//! is tested in zipweather-core.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use zipweather_core::Config;
use zipweather_web::{app, state::AppState};

fn test_app(config: Config) -> Router {
    app(Arc::new(AppState::new(config)))
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}

fn post_weather(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/weather")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request must build")
}

#[tokio::test]
async fn index_embeds_the_default_postal_code() {
    let config = Config {
        default_postal_code: Some("1000001".to_string()),
        api_key: None,
    };

    let response = test_app(config)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .expect("request must succeed");

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be readable")
        .to_bytes();
    let html = String::from_utf8(bytes.to_vec()).expect("page must be UTF-8");

    assert!(html.contains(r#"value="1000001""#));
    assert!(html.contains("郵便番号"));
}

#[tokio::test]
async fn index_renders_without_a_default() {
    let response = test_app(Config::default())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .expect("request must succeed");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_postal_code_without_default_is_400() {
    let response = test_app(Config::default())
        .oneshot(post_weather("{}"))
        .await
        .expect("request must succeed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"], "郵便番号が指定されていません");
}

#[tokio::test]
async fn blank_postal_code_without_default_is_400() {
    let response = test_app(Config::default())
        .oneshot(post_weather(r#"{"postal_code": "   "}"#))
        .await
        .expect("request must succeed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_postal_code_is_400_before_any_lookup() {
    let config = Config {
        default_postal_code: None,
        api_key: Some("test_api_key".to_string()),
    };

    let response = test_app(config)
        .oneshot(post_weather(r#"{"postal_code": "abc"}"#))
        .await
        .expect("request must succeed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(
        body["error"]
            .as_str()
            .expect("error must be a string")
            .contains("7桁")
    );
}

#[tokio::test]
async fn missing_api_key_is_500() {
    let config = Config {
        default_postal_code: None,
        api_key: None,
    };

    let response = test_app(config)
        .oneshot(post_weather(r#"{"postal_code": "1000001"}"#))
        .await
        .expect("request must succeed");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert!(
        body["error"]
            .as_str()
            .expect("error must be a string")
            .contains("APIキー")
    );
}
