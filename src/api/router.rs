use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::invoices;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Authentication endpoints
        .nest("/auth", auth::create_auth_router())
        // Invoice form endpoints
        .nest("/invoices", invoices::create_invoices_router())
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::create_in_memory_state;
    use crate::domain::view_cache::INVOICES_VIEW_PATH;

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = create_router_with_state(create_in_memory_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_invoice_form_roundtrip() {
        let app = create_router_with_state(create_in_memory_state());

        let response = app
            .clone()
            .oneshot(form_request(
                "/invoices",
                "customerId=cust-7&amount=19.99&status=pending",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            INVOICES_VIEW_PATH
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/invoices")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let rendered = String::from_utf8(body.to_vec()).unwrap();
        assert!(rendered.contains("cust-7"));
        assert!(rendered.contains("1999"));
    }

    #[tokio::test]
    async fn test_invalid_invoice_form_returns_field_errors() {
        let app = create_router_with_state(create_in_memory_state());

        let response = app
            .oneshot(form_request(
                "/invoices",
                "customerId=cust-7&amount=0&status=pending",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let state: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            state["errors"]["amount"][0],
            "Enter an amount greater than 0."
        );
    }

    #[tokio::test]
    async fn test_login_route_with_unknown_user() {
        let app = create_router_with_state(create_in_memory_state());

        let response = app
            .oneshot(form_request(
                "/auth/login",
                "email=ana%40x.com&password=secret123",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(body.to_vec()).unwrap(), "Invalid credentials.");
    }
}
