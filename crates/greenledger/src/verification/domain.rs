use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in the four-stage verification wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    CollectingLoanInfo,
    CollectingMetrics,
    UploadingDocuments,
    VerificationComplete,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::CollectingLoanInfo,
            Self::CollectingMetrics,
            Self::UploadingDocuments,
            Self::VerificationComplete,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::CollectingLoanInfo => 1,
            Self::CollectingMetrics => 2,
            Self::UploadingDocuments => 3,
            Self::VerificationComplete => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CollectingLoanInfo => "Loan Information",
            Self::CollectingMetrics => "ESG Metrics",
            Self::UploadingDocuments => "Document Upload & Verification",
            Self::VerificationComplete => "Verification Complete",
        }
    }

    pub(crate) const fn previous(self) -> Option<Self> {
        match self {
            Self::CollectingMetrics => Some(Self::CollectingLoanInfo),
            Self::UploadingDocuments => Some(Self::CollectingMetrics),
            Self::CollectingLoanInfo | Self::VerificationComplete => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

/// Loan details exactly as entered; validation happens when leaving step 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInfo {
    pub borrower: String,
    /// Raw amount text as typed by the submitter.
    pub amount: String,
    pub project_category: String,
}

impl LoanInfo {
    pub fn new(
        borrower: impl Into<String>,
        amount: impl Into<String>,
        project_category: impl Into<String>,
    ) -> Self {
        Self {
            borrower: borrower.into(),
            amount: amount.into(),
            project_category: project_category.into(),
        }
    }

    /// Names of the fields that are still blank.
    pub fn missing_fields(&self) -> Vec<String> {
        [
            ("borrower", &self.borrower),
            ("amount", &self.amount),
            ("project_category", &self.project_category),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
    }

    pub fn parsed_amount(&self) -> Result<f64, VerificationError> {
        let raw = self.amount.trim();
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => Err(VerificationError::InvalidAmount(raw.to_string())),
        }
    }
}

/// Outcome of a recorded check. Checks are only recorded once they pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
}

impl StepStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
        }
    }
}

/// One line of the verification progress list shown after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStepRecord {
    pub id: String,
    pub step: String,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerificationError {
    #[error("workflow is at step {actual}, expected step {expected}")]
    InvalidStep {
        expected: WizardStep,
        actual: WizardStep,
    },
    #[error("cannot go back from step {0}")]
    NoPreviousStep(WizardStep),
    #[error("missing required input: {}", .0.join(", "))]
    Incomplete(Vec<String>),
    #[error("loan amount '{0}' is not a valid non-negative number")]
    InvalidAmount(String),
    #[error("'{0}' is not a required document for this project")]
    UnknownDocument(String),
}
