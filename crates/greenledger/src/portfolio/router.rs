use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::analytics::PortfolioAnalytics;
use super::domain::{Loan, LoanId};
use super::marketplace::{sectors, MarketplaceFilter};
use super::metrics::PortfolioMetrics;
use super::report::{PortfolioReport, ReportKind};
use super::repository::{LoanRepository, RepositoryError};
use crate::scoring::{required_documents, ScoreCategory};

/// Read-only endpoints over the loan repository.
pub fn portfolio_router<R>(repository: Arc<R>) -> Router
where
    R: LoanRepository + 'static,
{
    Router::new()
        .route("/api/v1/loans", get(list_handler::<R>))
        .route("/api/v1/loans/:loan_id", get(detail_handler::<R>))
        .route("/api/v1/portfolio/metrics", get(metrics_handler::<R>))
        .route("/api/v1/marketplace", get(marketplace_handler::<R>))
        .route("/api/v1/analytics", get(analytics_handler::<R>))
        .route("/api/v1/reports/:kind", get(report_handler::<R>))
        .with_state(repository)
}

#[derive(Debug, Clone, Serialize)]
pub struct LoanDetailView {
    #[serde(flatten)]
    pub loan: Loan,
    pub score_category: ScoreCategory,
    pub required_documents: Vec<&'static str>,
    pub outstanding_documents: Vec<&'static str>,
}

impl From<Loan> for LoanDetailView {
    fn from(loan: Loan) -> Self {
        Self {
            score_category: loan.score_category(),
            required_documents: required_documents(&loan.project_type),
            outstanding_documents: loan.outstanding_documents(),
            loan,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportQuery {
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) async fn list_handler<R>(State(repository): State<Arc<R>>) -> Response
where
    R: LoanRepository + 'static,
{
    match repository.all() {
        Ok(loans) => (StatusCode::OK, Json(loans)).into_response(),
        Err(err) => repository_failure(err),
    }
}

pub(crate) async fn detail_handler<R>(
    State(repository): State<Arc<R>>,
    Path(loan_id): Path<String>,
) -> Response
where
    R: LoanRepository + 'static,
{
    let id = LoanId(loan_id);
    match repository.fetch(&id) {
        Ok(Some(loan)) => (StatusCode::OK, Json(LoanDetailView::from(loan))).into_response(),
        Ok(None) => repository_failure(RepositoryError::NotFound),
        Err(err) => repository_failure(err),
    }
}

pub(crate) async fn metrics_handler<R>(State(repository): State<Arc<R>>) -> Response
where
    R: LoanRepository + 'static,
{
    match repository.all() {
        Ok(loans) => (StatusCode::OK, Json(PortfolioMetrics::from_loans(&loans))).into_response(),
        Err(err) => repository_failure(err),
    }
}

pub(crate) async fn marketplace_handler<R>(
    State(repository): State<Arc<R>>,
    Query(filter): Query<MarketplaceFilter>,
) -> Response
where
    R: LoanRepository + 'static,
{
    match repository.all() {
        Ok(loans) => {
            let listing = filter.apply(&loans);
            let payload = json!({
                "filter": filter,
                "sectors": sectors(&loans),
                "shown": listing.shown,
                "total": listing.total,
                "loans": listing.loans,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => repository_failure(err),
    }
}

pub(crate) async fn analytics_handler<R>(State(repository): State<Arc<R>>) -> Response
where
    R: LoanRepository + 'static,
{
    match repository.all() {
        Ok(loans) => (StatusCode::OK, Json(PortfolioAnalytics::from_loans(&loans))).into_response(),
        Err(err) => repository_failure(err),
    }
}

pub(crate) async fn report_handler<R>(
    State(repository): State<Arc<R>>,
    Path(kind): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    R: LoanRepository + 'static,
{
    let kind = match kind.parse::<ReportKind>() {
        Ok(kind) => kind,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match repository.all() {
        Ok(loans) => {
            let today = query.today.unwrap_or_else(|| Local::now().date_naive());
            let report = PortfolioReport::build(kind, &loans, today);
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => repository_failure(err),
    }
}

fn repository_failure(err: RepositoryError) -> Response {
    let status = match err {
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::Conflict => StatusCode::CONFLICT,
        RepositoryError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
