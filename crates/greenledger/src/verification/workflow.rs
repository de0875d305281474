use super::domain::{LoanInfo, StepStatus, VerificationError, VerificationStepRecord, WizardStep};
use crate::portfolio::GreenTag;
use crate::scoring::{compute_green_score, required_documents, EnvironmentalMetrics};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Checks recorded when a submission is verified, in display order.
pub const VERIFICATION_CHECKS: [&str; 5] = [
    "Document Completeness Check",
    "ESG Metrics Validation",
    "Third-Party Verification",
    "Green Score Calculation",
    "GreenTag Issuance",
];

/// Issuer settings stamped onto every GreenTag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPolicy {
    pub verified_by: String,
    pub validity_days: u32,
}

impl Default for TagPolicy {
    fn default() -> Self {
        Self {
            verified_by: "ESG Verification Corp".to_string(),
            validity_days: 365,
        }
    }
}

/// Single-submitter verification wizard.
///
/// The struct owns every piece of form state; transitions validate their
/// preconditions and either advance the step or return why they could not.
/// Going back never re-validates or clears what was entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerificationWorkflow {
    step: WizardStep,
    loan_info: LoanInfo,
    metrics: EnvironmentalMetrics,
    green_score: Option<u8>,
    uploaded_documents: Vec<String>,
    verification_steps: Vec<VerificationStepRecord>,
    green_tag: Option<GreenTag>,
}

impl VerificationWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn loan_info(&self) -> &LoanInfo {
        &self.loan_info
    }

    pub fn metrics(&self) -> &EnvironmentalMetrics {
        &self.metrics
    }

    pub fn green_score(&self) -> Option<u8> {
        self.green_score
    }

    pub fn uploaded_documents(&self) -> &[String] {
        &self.uploaded_documents
    }

    pub fn verification_steps(&self) -> &[VerificationStepRecord] {
        &self.verification_steps
    }

    pub fn green_tag(&self) -> Option<&GreenTag> {
        self.green_tag.as_ref()
    }

    pub fn set_loan_info(&mut self, loan_info: LoanInfo) -> Result<(), VerificationError> {
        self.expect_step(WizardStep::CollectingLoanInfo)?;
        self.loan_info = loan_info;
        Ok(())
    }

    /// Whether step 1 has everything it needs to move on.
    pub fn can_advance_to_metrics(&self) -> bool {
        self.loan_info.missing_fields().is_empty() && self.loan_info.parsed_amount().is_ok()
    }

    /// 1 → 2.
    pub fn advance_to_metrics(&mut self) -> Result<(), VerificationError> {
        self.expect_step(WizardStep::CollectingLoanInfo)?;

        let missing = self.loan_info.missing_fields();
        if !missing.is_empty() {
            return Err(VerificationError::Incomplete(missing));
        }
        self.loan_info.parsed_amount()?;

        self.step = WizardStep::CollectingMetrics;
        Ok(())
    }

    pub fn set_metrics(&mut self, metrics: EnvironmentalMetrics) -> Result<(), VerificationError> {
        self.expect_step(WizardStep::CollectingMetrics)?;
        self.metrics = metrics;
        Ok(())
    }

    /// 2 → 3. Scores whatever metrics were entered; unset fields count as zero.
    pub fn calculate_score(&mut self) -> Result<u8, VerificationError> {
        self.expect_step(WizardStep::CollectingMetrics)?;

        let score = compute_green_score(&self.metrics);
        self.green_score = Some(score);
        self.step = WizardStep::UploadingDocuments;
        Ok(score)
    }

    pub fn required_documents(&self) -> Vec<&'static str> {
        required_documents(&self.loan_info.project_category)
    }

    pub fn outstanding_documents(&self) -> Vec<&'static str> {
        self.required_documents()
            .into_iter()
            .filter(|required| !self.is_uploaded(required))
            .collect()
    }

    pub fn is_uploaded(&self, document: &str) -> bool {
        self.uploaded_documents.iter().any(|name| name == document)
    }

    /// Records a simulated upload. Re-marking an uploaded document is a no-op.
    pub fn mark_uploaded(&mut self, document: &str) -> Result<(), VerificationError> {
        self.expect_step(WizardStep::UploadingDocuments)?;

        let required = self.required_documents();
        if !required.iter().any(|name| *name == document) {
            return Err(VerificationError::UnknownDocument(document.to_string()));
        }
        if !self.is_uploaded(document) {
            self.uploaded_documents.push(document.to_string());
        }
        Ok(())
    }

    pub fn can_complete(&self) -> bool {
        self.step == WizardStep::UploadingDocuments && self.outstanding_documents().is_empty()
    }

    /// 3 → 4. Every check passes unconditionally and a GreenTag is issued.
    pub fn complete_verification(
        &mut self,
        completed_at: DateTime<Utc>,
        policy: &TagPolicy,
    ) -> Result<&GreenTag, VerificationError> {
        self.expect_step(WizardStep::UploadingDocuments)?;

        let outstanding = self.outstanding_documents();
        if !outstanding.is_empty() {
            return Err(VerificationError::Incomplete(
                outstanding.into_iter().map(str::to_string).collect(),
            ));
        }

        self.verification_steps = VERIFICATION_CHECKS
            .iter()
            .enumerate()
            .map(|(index, check)| VerificationStepRecord {
                id: (index + 1).to_string(),
                step: check.to_string(),
                status: StepStatus::Completed,
                completed_at: Some(completed_at),
                notes: None,
            })
            .collect();

        let issued_date = completed_at.date_naive();
        let tag = GreenTag {
            id: format!("GT-{}", completed_at.timestamp_millis()),
            loan_id: None,
            score: self.green_score.unwrap_or_default(),
            issued_date,
            verified_by: policy.verified_by.clone(),
            expiry_date: issued_date + Duration::days(i64::from(policy.validity_days)),
            immutable: true,
        };
        self.step = WizardStep::VerificationComplete;

        Ok(self.green_tag.insert(tag))
    }

    /// 2 → 1 or 3 → 2, keeping everything already entered.
    pub fn back(&mut self) -> Result<WizardStep, VerificationError> {
        let previous = self
            .step
            .previous()
            .ok_or(VerificationError::NoPreviousStep(self.step))?;
        self.step = previous;
        Ok(previous)
    }

    /// Back to an empty step 1 from anywhere.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), VerificationError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(VerificationError::InvalidStep {
                expected,
                actual: self.step,
            })
        }
    }
}
