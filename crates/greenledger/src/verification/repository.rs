use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::workflow::VerificationWorkflow;
pub use crate::portfolio::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored wizard session.
#[derive(Debug, Clone)]
pub struct WorkflowRecord {
    pub session_id: SessionId,
    pub workflow: VerificationWorkflow,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage abstraction for in-flight verification sessions.
pub trait WorkflowRepository: Send + Sync {
    fn insert(&self, record: WorkflowRecord) -> Result<WorkflowRecord, RepositoryError>;
    fn update(&self, record: WorkflowRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<WorkflowRecord>, RepositoryError>;
}
