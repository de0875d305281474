use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use greenledger::portfolio::{portfolio_router, LoanRepository};
use greenledger::scoring::{
    required_documents, score_breakdown, EnvironmentalMetrics, ProjectCategory, ScoreCategory,
    ScoreComponent,
};
use greenledger::verification::{verification_router, VerificationService, WorkflowRepository};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct GreenScoreResponse {
    pub(crate) score: u8,
    pub(crate) category: ScoreCategory,
    pub(crate) breakdown: Vec<ScoreComponent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RequirementsQuery {
    #[serde(default)]
    pub(crate) category: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequirementsResponse {
    pub(crate) category: String,
    pub(crate) recognized: bool,
    pub(crate) documents: Vec<&'static str>,
}

pub(crate) fn with_service_routes<L, W>(
    loans: Arc<L>,
    verifications: Arc<VerificationService<W>>,
) -> axum::Router
where
    L: LoanRepository + 'static,
    W: WorkflowRepository + 'static,
{
    portfolio_router(loans)
        .merge(verification_router(verifications))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/scoring/green-score",
            axum::routing::post(green_score_endpoint),
        )
        .route(
            "/api/v1/scoring/requirements",
            axum::routing::get(requirements_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn green_score_endpoint(
    Json(metrics): Json<EnvironmentalMetrics>,
) -> Json<GreenScoreResponse> {
    let breakdown = score_breakdown(&metrics);
    Json(GreenScoreResponse {
        score: breakdown.score,
        category: breakdown.category(),
        breakdown: breakdown.components,
    })
}

pub(crate) async fn requirements_endpoint(
    Query(query): Query<RequirementsQuery>,
) -> Json<RequirementsResponse> {
    let RequirementsQuery { category } = query;
    Json(RequirementsResponse {
        recognized: ProjectCategory::parse(&category).is_some(),
        documents: required_documents(&category),
        category,
    })
}
