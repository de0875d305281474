use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::scoring::EnvironmentalMetrics;
use crate::verification::repository::{
    RepositoryError, SessionId, WorkflowRecord, WorkflowRepository,
};
use crate::verification::{
    verification_router, LoanInfo, TagPolicy, VerificationService, VerificationWorkflow,
};

pub(super) fn solar_loan_info() -> LoanInfo {
    LoanInfo::new("SolarTech Industries", "5000000", "Solar Energy")
}

pub(super) fn solar_metrics() -> EnvironmentalMetrics {
    EnvironmentalMetrics {
        co2_reduction: 85_000.0,
        renewable_energy_percent: 100.0,
        water_saved: 12_000.0,
        certifications: vec![
            "ISO 14001".to_string(),
            "Solar Energy Certification".to_string(),
            "Carbon Neutral".to_string(),
        ],
        sustainability_goals: vec![
            "Net Zero by 2030".to_string(),
            "Community Solar Access".to_string(),
            "Job Creation".to_string(),
        ],
        impact_description: "Large-scale solar farm providing clean energy to 15,000 homes"
            .to_string(),
    }
}

pub(super) fn completion_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn tag_policy() -> TagPolicy {
    TagPolicy {
        verified_by: "Northwind Assurance".to_string(),
        validity_days: 365,
    }
}

/// Workflow parked on the document step for the solar category.
pub(super) fn workflow_at_documents() -> VerificationWorkflow {
    let mut workflow = VerificationWorkflow::new();
    workflow
        .set_loan_info(solar_loan_info())
        .expect("loan info accepted");
    workflow.advance_to_metrics().expect("advance to metrics");
    workflow
        .set_metrics(solar_metrics())
        .expect("metrics accepted");
    workflow.calculate_score().expect("score calculated");
    workflow
}

pub(super) fn upload_all(workflow: &mut VerificationWorkflow) {
    for document in workflow.required_documents() {
        workflow.mark_uploaded(document).expect("document accepted");
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryWorkflows {
    records: Arc<Mutex<HashMap<SessionId, WorkflowRecord>>>,
}

impl WorkflowRepository for MemoryWorkflows {
    fn insert(&self, record: WorkflowRecord) -> Result<WorkflowRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: WorkflowRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<WorkflowRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableWorkflows;

impl WorkflowRepository for UnavailableWorkflows {
    fn insert(&self, _record: WorkflowRecord) -> Result<WorkflowRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }

    fn update(&self, _record: WorkflowRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<WorkflowRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }
}

pub(super) fn service_with(
    repository: MemoryWorkflows,
) -> VerificationService<MemoryWorkflows> {
    VerificationService::new(Arc::new(repository), tag_policy())
}

pub(super) fn router_with(repository: MemoryWorkflows) -> axum::Router {
    verification_router(Arc::new(service_with(repository)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
