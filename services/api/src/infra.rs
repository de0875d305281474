use chrono::NaiveDate;
use greenledger::portfolio::{sample_portfolio, Loan, LoanId, LoanRepository, RepositoryError};
use greenledger::verification::{SessionId, WizardStep, WorkflowRecord, WorkflowRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loan book held in memory, in insertion order.
#[derive(Clone)]
pub(crate) struct InMemoryLoanRepository {
    loans: Arc<Mutex<Vec<Loan>>>,
}

impl InMemoryLoanRepository {
    pub(crate) fn new(loans: Vec<Loan>) -> Self {
        Self {
            loans: Arc::new(Mutex::new(loans)),
        }
    }

    pub(crate) fn seeded() -> Self {
        Self::new(sample_portfolio())
    }
}

impl LoanRepository for InMemoryLoanRepository {
    fn all(&self) -> Result<Vec<Loan>, RepositoryError> {
        let guard = self
            .loans
            .lock()
            .map_err(|_| poisoned("loan store"))?;
        Ok(guard.clone())
    }

    fn fetch(&self, id: &LoanId) -> Result<Option<Loan>, RepositoryError> {
        let guard = self
            .loans
            .lock()
            .map_err(|_| poisoned("loan store"))?;
        Ok(guard.iter().find(|loan| &loan.id == id).cloned())
    }
}

pub(crate) const DEFAULT_SESSION_CAPACITY: usize = 1_024;

/// Bounded session store. When full, inserting evicts the least recently
/// updated completed session, or the least recently updated session if none
/// has completed.
#[derive(Clone)]
pub(crate) struct InMemoryWorkflowRepository {
    records: Arc<Mutex<HashMap<SessionId, WorkflowRecord>>>,
    capacity: usize,
}

impl Default for InMemoryWorkflowRepository {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }
}

impl InMemoryWorkflowRepository {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }
}

fn eviction_candidate(records: &HashMap<SessionId, WorkflowRecord>) -> Option<SessionId> {
    let oldest = |completed_only: bool| {
        records
            .values()
            .filter(|record| {
                !completed_only || record.workflow.step() == WizardStep::VerificationComplete
            })
            .min_by_key(|record| record.updated_at)
            .map(|record| record.session_id.clone())
    };
    oldest(true).or_else(|| oldest(false))
}

impl WorkflowRepository for InMemoryWorkflowRepository {
    fn insert(&self, record: WorkflowRecord) -> Result<WorkflowRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| poisoned("session store"))?;
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        while guard.len() >= self.capacity {
            let Some(evicted) = eviction_candidate(&guard) else {
                break;
            };
            guard.remove(&evicted);
            debug!(session = %evicted, "evicted verification session");
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: WorkflowRecord) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| poisoned("session store"))?;
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<WorkflowRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| poisoned("session store"))?;
        Ok(guard.get(id).cloned())
    }
}

fn poisoned(store: &str) -> RepositoryError {
    RepositoryError::Unavailable(format!("{store} lock poisoned"))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
