use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use super::domain::{LoanInfo, VerificationError};
use super::repository::{RepositoryError, SessionId, WorkflowRepository};
use super::service::{VerificationService, VerificationServiceError};
use super::view::WorkflowView;
use crate::scoring::EnvironmentalMetrics;

/// Router builder exposing the verification wizard over HTTP.
pub fn verification_router<R>(service: Arc<VerificationService<R>>) -> Router
where
    R: WorkflowRepository + 'static,
{
    Router::new()
        .route("/api/v1/verifications", post(start_handler::<R>))
        .route("/api/v1/verifications/:session_id", get(status_handler::<R>))
        .route(
            "/api/v1/verifications/:session_id/loan-info",
            post(loan_info_handler::<R>),
        )
        .route(
            "/api/v1/verifications/:session_id/metrics",
            post(metrics_handler::<R>),
        )
        .route(
            "/api/v1/verifications/:session_id/documents",
            post(document_handler::<R>),
        )
        .route(
            "/api/v1/verifications/:session_id/complete",
            post(complete_handler::<R>),
        )
        .route(
            "/api/v1/verifications/:session_id/back",
            post(back_handler::<R>),
        )
        .route(
            "/api/v1/verifications/:session_id/reset",
            post(reset_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoanInfoRequest {
    #[serde(default)]
    pub(crate) borrower: String,
    #[serde(default, deserialize_with = "amount_text")]
    pub(crate) amount: String,
    #[serde(default)]
    pub(crate) project_category: String,
}

impl From<LoanInfoRequest> for LoanInfo {
    fn from(request: LoanInfoRequest) -> Self {
        LoanInfo::new(request.borrower, request.amount, request.project_category)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentUploadRequest {
    pub(crate) document: String,
}

/// Accepts the amount either as typed text or as a JSON number.
fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AmountInput {
        Text(String),
        Number(f64),
    }

    Ok(match AmountInput::deserialize(deserializer)? {
        AmountInput::Text(text) => text,
        AmountInput::Number(number) => number.to_string(),
    })
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
) -> Response
where
    R: WorkflowRepository + 'static,
{
    respond(service.start(), StatusCode::CREATED)
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: WorkflowRepository + 'static,
{
    respond(service.get(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn loan_info_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(session_id): Path<String>,
    Json(request): Json<LoanInfoRequest>,
) -> Response
where
    R: WorkflowRepository + 'static,
{
    respond(
        service.submit_loan_info(&SessionId(session_id), request.into()),
        StatusCode::OK,
    )
}

pub(crate) async fn metrics_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(session_id): Path<String>,
    Json(metrics): Json<EnvironmentalMetrics>,
) -> Response
where
    R: WorkflowRepository + 'static,
{
    respond(
        service.submit_metrics(&SessionId(session_id), metrics),
        StatusCode::OK,
    )
}

pub(crate) async fn document_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(session_id): Path<String>,
    Json(request): Json<DocumentUploadRequest>,
) -> Response
where
    R: WorkflowRepository + 'static,
{
    respond(
        service.upload_document(&SessionId(session_id), &request.document),
        StatusCode::OK,
    )
}

pub(crate) async fn complete_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: WorkflowRepository + 'static,
{
    respond(service.complete(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn back_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: WorkflowRepository + 'static,
{
    respond(service.back(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn reset_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: WorkflowRepository + 'static,
{
    respond(service.reset(&SessionId(session_id)), StatusCode::OK)
}

fn respond(result: Result<WorkflowView, VerificationServiceError>, success: StatusCode) -> Response {
    match result {
        Ok(view) => (success, Json(view)).into_response(),
        Err(err) => {
            let status = match &err {
                VerificationServiceError::Workflow(VerificationError::InvalidStep { .. })
                | VerificationServiceError::Workflow(VerificationError::NoPreviousStep(_)) => {
                    StatusCode::CONFLICT
                }
                VerificationServiceError::Workflow(_) => StatusCode::UNPROCESSABLE_ENTITY,
                VerificationServiceError::Repository(RepositoryError::NotFound) => {
                    StatusCode::NOT_FOUND
                }
                VerificationServiceError::Repository(RepositoryError::Conflict) => {
                    StatusCode::CONFLICT
                }
                VerificationServiceError::Repository(RepositoryError::Unavailable(_)) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            let payload = json!({ "error": err.to_string() });
            (status, Json(payload)).into_response()
        }
    }
}
