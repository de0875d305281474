//! Four-step verification wizard: loan details, ESG metrics, document upload,
//! and GreenTag issuance.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod view;
mod workflow;

#[cfg(test)]
mod tests;

pub use domain::{LoanInfo, StepStatus, VerificationError, VerificationStepRecord, WizardStep};
pub use repository::{SessionId, WorkflowRecord, WorkflowRepository};
pub use router::verification_router;
pub use service::{VerificationService, VerificationServiceError};
pub use view::{DocumentChecklistEntry, WorkflowView};
pub use workflow::{TagPolicy, VerificationWorkflow, VERIFICATION_CHECKS};
