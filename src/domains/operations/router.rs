//! Router for a single operation service.

use axum::{Router, routing::get};

use super::definitions::OperationKind;
use super::handlers::{calculate, health, root};
use super::service::OperationService;
use crate::core::response::{method_not_allowed, not_found};

/// Build the router serving `/`, `/health` and `/<op>` for one operation.
pub fn build_operation_router(kind: OperationKind) -> Router {
    let service = OperationService::new(kind);

    Router::new()
        .route(&format!("/{}", kind.path()), get(calculate))
        .route("/health", get(health))
        .route("/", get(root))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(kind: OperationKind, uri: &str) -> (StatusCode, Value) {
        let response = build_operation_router(kind)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_add_endpoint() {
        let (status, body) = get_json(OperationKind::Addition, "/add?a=5&b=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["operation"], "addition");
        assert_eq!(body["operands"]["a"], 5.0);
        assert_eq!(body["operands"]["b"], 3.0);
        assert_eq!(body["result"], 8.0);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_each_service_serves_only_its_operation() {
        let (status, _) = get_json(OperationKind::Subtraction, "/add?a=5&b=3").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = get_json(OperationKind::Subtraction, "/subtract?a=10&b=4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], 6.0);
    }

    #[tokio::test]
    async fn test_invalid_input() {
        for uri in ["/multiply?a=foo&b=2", "/multiply?a=&b=2", "/multiply?b=2", "/multiply"] {
            let (status, body) = get_json(OperationKind::Multiplication, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                body,
                serde_json::json!({ "error": "Invalid input: a and b must be numbers" })
            );
        }
    }

    #[tokio::test]
    async fn test_division_by_zero() {
        for (uri, a) in [("/divide?a=20&b=0", 20.0), ("/divide?a=0&b=0", 0.0)] {
            let (status, body) = get_json(OperationKind::Division, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Division by zero is not allowed");
            assert_eq!(body["operands"]["a"], a);
            assert_eq!(body["operands"]["b"], 0.0);
            assert!(body.get("result").is_none());
        }
    }

    #[tokio::test]
    async fn test_overflow_is_internal_error() {
        let (status, body) =
            get_json(OperationKind::Multiplication, "/multiply?a=1e308&b=10").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(body["details"].as_str().unwrap().contains("finite"));
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let (status, body) = get_json(OperationKind::Division, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Division service is healthy");

        let (status, body) = get_json(OperationKind::Division, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "Division Microservice");
    }

    #[tokio::test]
    async fn test_wrong_method_is_json_error() {
        let response = build_operation_router(OperationKind::Addition)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/add?a=5&b=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json(OperationKind::Addition, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }
}
