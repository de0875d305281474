use super::domain::{LoanInfo, VerificationStepRecord, WizardStep};
use super::repository::{SessionId, WorkflowRecord};
use crate::portfolio::GreenTag;
use crate::scoring::{classify_score, ScoreCategory};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentChecklistEntry {
    pub name: &'static str,
    pub uploaded: bool,
}

/// What the presentation layer needs to render the current wizard screen.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowView {
    pub session_id: SessionId,
    pub step: WizardStep,
    pub step_number: u8,
    pub step_label: &'static str,
    pub loan_info: LoanInfo,
    pub can_continue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_category: Option<ScoreCategory>,
    pub documents: Vec<DocumentChecklistEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verification_steps: Vec<VerificationStepRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green_tag: Option<GreenTag>,
    pub updated_at: DateTime<Utc>,
}

impl WorkflowRecord {
    pub fn view(&self) -> WorkflowView {
        let workflow = &self.workflow;
        let step = workflow.step();
        let can_continue = match step {
            WizardStep::CollectingLoanInfo => workflow.can_advance_to_metrics(),
            WizardStep::CollectingMetrics => true,
            WizardStep::UploadingDocuments => workflow.can_complete(),
            WizardStep::VerificationComplete => false,
        };

        WorkflowView {
            session_id: self.session_id.clone(),
            step,
            step_number: step.number(),
            step_label: step.label(),
            loan_info: workflow.loan_info().clone(),
            can_continue,
            green_score: workflow.green_score(),
            score_category: workflow.green_score().map(classify_score),
            documents: workflow
                .required_documents()
                .into_iter()
                .map(|name| DocumentChecklistEntry {
                    name,
                    uploaded: workflow.is_uploaded(name),
                })
                .collect(),
            verification_steps: workflow.verification_steps().to_vec(),
            green_tag: workflow.green_tag().cloned(),
            updated_at: self.updated_at,
        }
    }
}
