//! Invoice form endpoints
//!
//! Mutations follow the dashboard's form contract: a successful POST ends in
//! a redirect back to the invoices list view, a failed one returns the form
//! state for re-render. Deletes return no content and no redirect.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Form};
use crate::domain::invoice::{InvoiceFormData, InvoiceId};
use crate::domain::view_cache::INVOICES_VIEW_PATH;
use crate::domain::ActionError;

/// Create the invoices router
pub fn create_invoices_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route("/{id}", post(update_invoice).delete(remove_invoice))
}

/// Create an invoice from a form submission
///
/// POST /invoices
///
/// Redirects to the invoices list view on success.
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceFormData>,
) -> Result<Redirect, ActionError> {
    state.invoice_service.create(form).await?;

    Ok(Redirect::to(INVOICES_VIEW_PATH))
}

/// Replace an existing invoice from a form submission
///
/// POST /invoices/{id}
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<InvoiceFormData>,
) -> Result<Redirect, ActionError> {
    state
        .invoice_service
        .update(InvoiceId::from_uuid(id), form)
        .await?;

    Ok(Redirect::to(INVOICES_VIEW_PATH))
}

/// Delete an invoice
///
/// DELETE /invoices/{id}
///
/// Returns 204 whether or not the id still existed; only a database failure
/// reports a message.
pub async fn remove_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ActionError> {
    state.invoice_service.remove(InvoiceId::from_uuid(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Rendered invoices list view, cached between mutations
///
/// GET /invoices
pub async fn list_invoices(State(state): State<AppState>) -> Result<Response, ApiError> {
    let rendered = state.invoice_service.list_view().await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        rendered,
    )
        .into_response())
}
