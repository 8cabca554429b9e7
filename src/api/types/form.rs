//! Form submission plumbing
//!
//! Form actions answer in one of two ways: a redirect on success, or a
//! [`FormState`] body the form layer re-renders. This module provides the
//! response side plus a `Form` extractor whose rejections use the same body
//! shape instead of axum's plain-text default.

use axum::{
    extract::{Form as AxumForm, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{ActionError, FieldErrors};

/// Body returned to the form layer on any recoverable failure
#[derive(Debug, Clone, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    pub message: String,
}

impl From<ActionError> for FormState {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::Invalid { errors, message } => Self {
                errors: Some(errors),
                message,
            },
            ActionError::Failed { message } => Self {
                errors: None,
                message,
            },
        }
    }
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        let status = match &self {
            ActionError::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ActionError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(FormState::from(self))).into_response()
    }
}

/// Form extractor that reports rejections in the [`FormState`] shape
#[derive(Debug, Clone, Copy, Default)]
pub struct Form<T>(pub T);

impl<S, T> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = FormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumForm::<T>::from_request(req, state).await {
            Ok(AxumForm(value)) => Ok(Form(value)),
            Err(rejection) => Err(FormRejection {
                status: rejection.status(),
                message: rejection.body_text(),
            }),
        }
    }
}

/// Form rejection error that returns the form-state body
#[derive(Debug)]
pub struct FormRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for FormRejection {
    fn into_response(self) -> Response {
        let state = FormState {
            errors: None,
            message: self.message,
        };

        (self.status, Json(state)).into_response()
    }
}
