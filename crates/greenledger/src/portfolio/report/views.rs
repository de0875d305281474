use super::super::domain::{Currency, VerificationStatus};
use crate::scoring::ScoreBand;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportHeadline {
    pub total_value: f64,
    pub green_loans: usize,
    pub total_loans: usize,
    pub total_co2_reduction: f64,
    pub average_green_score: u8,
    pub green_percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanRow {
    pub loan_id: String,
    pub borrower: String,
    pub project_type: String,
    pub amount: f64,
    pub currency: Currency,
    pub green_score: u8,
    pub score_band: ScoreBand,
    pub score_label: &'static str,
    pub status: VerificationStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green_tag_id: Option<String>,
    pub documents_verified: usize,
    pub documents_total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: VerificationStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSummary {
    /// Loans whose project type mentions energy.
    pub energy_loans: usize,
    pub average_renewable_share: u8,
    pub total_water_saved: f64,
    /// Passenger vehicles removed from the road for the total CO₂ reduction.
    pub vehicles_equivalent: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub status_counts: Vec<StatusCount>,
    pub active_green_tags: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags_expiring_within_90_days: Vec<TagExpiry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagExpiry {
    pub tag_id: String,
    pub borrower: String,
    pub expiry_date: NaiveDate,
}
