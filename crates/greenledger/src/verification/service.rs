use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::domain::{LoanInfo, VerificationError};
use super::repository::{RepositoryError, SessionId, WorkflowRecord, WorkflowRepository};
use super::view::WorkflowView;
use super::workflow::{TagPolicy, VerificationWorkflow};
use crate::scoring::EnvironmentalMetrics;

/// Drives wizard sessions stored in a [`WorkflowRepository`].
pub struct VerificationService<R> {
    repository: Arc<R>,
    policy: TagPolicy,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("vs-{id:06}"))
}

impl<R> VerificationService<R>
where
    R: WorkflowRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: TagPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> &TagPolicy {
        &self.policy
    }

    /// Open a fresh session at step 1.
    pub fn start(&self) -> Result<WorkflowView, VerificationServiceError> {
        let now = Utc::now();
        let record = WorkflowRecord {
            session_id: next_session_id(),
            workflow: VerificationWorkflow::new(),
            started_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        info!(session = %stored.session_id, "verification session started");
        Ok(stored.view())
    }

    pub fn get(&self, session_id: &SessionId) -> Result<WorkflowView, VerificationServiceError> {
        Ok(self.load(session_id)?.view())
    }

    /// Store loan details and move on to the metrics step.
    pub fn submit_loan_info(
        &self,
        session_id: &SessionId,
        loan_info: LoanInfo,
    ) -> Result<WorkflowView, VerificationServiceError> {
        self.transition(session_id, |workflow| {
            workflow.set_loan_info(loan_info)?;
            workflow.advance_to_metrics()
        })
    }

    /// Store metrics, score them, and move on to document upload.
    pub fn submit_metrics(
        &self,
        session_id: &SessionId,
        metrics: EnvironmentalMetrics,
    ) -> Result<WorkflowView, VerificationServiceError> {
        self.transition(session_id, |workflow| {
            workflow.set_metrics(metrics)?;
            let score = workflow.calculate_score()?;
            debug!(score, "green score calculated");
            Ok(())
        })
    }

    pub fn upload_document(
        &self,
        session_id: &SessionId,
        document: &str,
    ) -> Result<WorkflowView, VerificationServiceError> {
        self.transition(session_id, |workflow| workflow.mark_uploaded(document))
    }

    pub fn complete(&self, session_id: &SessionId) -> Result<WorkflowView, VerificationServiceError> {
        self.complete_at(session_id, Utc::now())
    }

    /// Same as [`complete`](Self::complete) with an explicit completion instant.
    pub fn complete_at(
        &self,
        session_id: &SessionId,
        completed_at: DateTime<Utc>,
    ) -> Result<WorkflowView, VerificationServiceError> {
        let policy = self.policy.clone();
        self.transition(session_id, move |workflow| {
            let tag = workflow.complete_verification(completed_at, &policy)?;
            info!(tag = %tag.id, score = tag.score, "green tag issued");
            Ok(())
        })
    }

    pub fn back(&self, session_id: &SessionId) -> Result<WorkflowView, VerificationServiceError> {
        self.transition(session_id, |workflow| workflow.back().map(|_| ()))
    }

    pub fn reset(&self, session_id: &SessionId) -> Result<WorkflowView, VerificationServiceError> {
        self.transition(session_id, |workflow| {
            workflow.reset();
            Ok(())
        })
    }

    fn load(&self, session_id: &SessionId) -> Result<WorkflowRecord, VerificationServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Applies `apply` to a copy of the stored workflow and persists it only on success.
    fn transition<F>(
        &self,
        session_id: &SessionId,
        apply: F,
    ) -> Result<WorkflowView, VerificationServiceError>
    where
        F: FnOnce(&mut VerificationWorkflow) -> Result<(), VerificationError>,
    {
        let mut record = self.load(session_id)?;
        let from = record.workflow.step();

        apply(&mut record.workflow)?;
        record.updated_at = Utc::now();
        debug!(
            session = %session_id,
            from = from.number(),
            to = record.workflow.step().number(),
            "verification workflow transition"
        );

        self.repository.update(record.clone())?;
        Ok(record.view())
    }
}

/// Error raised by the verification service.
#[derive(Debug, thiserror::Error)]
pub enum VerificationServiceError {
    #[error(transparent)]
    Workflow(#[from] VerificationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
