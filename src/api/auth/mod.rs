//! Authentication API endpoints
//!
//! Registration follows the same form contract as the invoice actions. The
//! login endpoint only runs the credential check; establishing a session is
//! the verifier's side effect, so success carries no body.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Router,
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::Form;
use crate::domain::auth::{AuthError, Credentials};
use crate::domain::user::RegistrationFormData;
use crate::domain::view_cache::INVOICES_VIEW_PATH;
use crate::domain::ActionError;

/// Fixed message for a rejected credential check
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";
/// Fixed message for any other login failure
pub const LOGIN_FAILED_MESSAGE: &str = "Something went wrong.";

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Login form submission
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Register a new user from a form submission
///
/// POST /auth/register
///
/// Redirects to the invoices list view on success.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegistrationFormData>,
) -> Result<Redirect, ActionError> {
    state.user_service.register(form).await?;

    Ok(Redirect::to(INVOICES_VIEW_PATH))
}

/// Check submitted credentials
///
/// POST /auth/login
///
/// 204 on success; otherwise a fixed plain-text message. The rejected and
/// errored cases are deliberately the only two shapes a caller can observe.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let credentials = Credentials {
        email: form.email,
        password: form.password,
    };

    match state.credential_verifier.verify(&credentials).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(AuthError::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS_MESSAGE).into_response()
        }
        Err(AuthError::Other(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, LOGIN_FAILED_MESSAGE).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::header;

    use crate::create_in_memory_state;
    use crate::domain::auth::mock::MockCredentialVerifier;

    fn registration_form(name: &str, email: &str, password: &str) -> RegistrationFormData {
        RegistrationFormData {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login_form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    async fn body_text(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_register_redirects_to_list_view() {
        let state = create_in_memory_state();

        let response = register(
            State(state),
            Form(registration_form("Ana", "ana@x.com", "secret123")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            INVOICES_VIEW_PATH
        );
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let state = create_in_memory_state();

        let response = register(State(state), Form(RegistrationFormData::default()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_login_roundtrip_against_registered_user() {
        let state = create_in_memory_state();

        register(
            State(state.clone()),
            Form(registration_form("Ana", "ana@x.com", "secret123")),
        )
        .await
        .unwrap();

        let ok = login(State(state.clone()), Form(login_form("ana@x.com", "secret123"))).await;
        assert_eq!(ok.status(), StatusCode::NO_CONTENT);

        let rejected = login(State(state), Form(login_form("ana@x.com", "wrong"))).await;
        assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(rejected).await, INVALID_CREDENTIALS_MESSAGE);
    }

    #[tokio::test]
    async fn test_login_failure_messages_are_fixed() {
        let mut state = create_in_memory_state();
        state.credential_verifier = Arc::new(MockCredentialVerifier::Reject);

        let rejected = login(
            State(state.clone()),
            Form(login_form("ana@x.com", "secret123")),
        )
        .await;
        assert_eq!(body_text(rejected).await, "Invalid credentials.");

        state.credential_verifier =
            Arc::new(MockCredentialVerifier::Fail("pool exhausted".to_string()));

        let errored = login(State(state), Form(login_form("ana@x.com", "secret123"))).await;
        assert_eq!(errored.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let text = body_text(errored).await;
        assert_eq!(text, "Something went wrong.");
        // The underlying failure detail never reaches the client
        assert!(!text.contains("pool exhausted"));
    }
}
