use crate::scoring::{classify_score, required_documents, EnvironmentalMetrics, ScoreCategory};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoanId(pub String);

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    InReview,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Pending, Self::InReview, Self::Verified, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InReview => "In Review",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }
}

/// Certification record issued once a loan passes verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreenTag {
    pub id: String,
    pub loan_id: Option<LoanId>,
    pub score: u8,
    pub issued_date: NaiveDate,
    pub verified_by: String,
    pub expiry_date: NaiveDate,
    pub immutable: bool,
}

impl GreenTag {
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.issued_date <= date && date < self.expiry_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanDocument {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub upload_date: NaiveDate,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub borrower: String,
    pub amount: f64,
    pub currency: Currency,
    pub project_type: String,
    pub sector: String,
    pub maturity_date: NaiveDate,
    /// Annual rate in percent.
    pub interest_rate: f64,
    pub green_score: u8,
    pub green_tag: Option<GreenTag>,
    pub verification_status: VerificationStatus,
    pub esg_metrics: EnvironmentalMetrics,
    pub documents: Vec<LoanDocument>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Loan {
    /// A loan counts as green once it carries a GreenTag.
    pub fn is_green(&self) -> bool {
        self.green_tag.is_some()
    }

    pub fn score_category(&self) -> ScoreCategory {
        classify_score(self.green_score)
    }

    pub fn verified_document_count(&self) -> usize {
        self.documents.iter().filter(|doc| doc.verified).count()
    }

    /// Required documents for the project type with no matching upload on file.
    ///
    /// Uploads match on file stem, so `Carbon Footprint Analysis.xlsx` satisfies
    /// `Carbon Footprint Analysis`.
    pub fn outstanding_documents(&self) -> Vec<&'static str> {
        required_documents(&self.project_type)
            .into_iter()
            .filter(|required| {
                !self
                    .documents
                    .iter()
                    .any(|doc| document_stem(&doc.name) == *required)
            })
            .collect()
    }
}

fn document_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _extension)) if !stem.is_empty() => stem,
        _ => name,
    }
}
