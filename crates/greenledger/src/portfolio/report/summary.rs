use super::super::domain::{Loan, VerificationStatus};
use super::super::metrics::{vehicles_equivalent, PortfolioMetrics};
use super::views::{
    ComplianceSummary, ImpactSummary, LoanRow, ReportHeadline, StatusCount, TagExpiry,
};
use super::{ReportError, ReportKind};
use crate::scoring::round_half_up;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

const EXPIRY_WARNING_DAYS: i64 = 90;

/// Printable report assembled from the current portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioReport {
    pub kind: ReportKind,
    pub title: &'static str,
    pub audience: &'static str,
    pub generated_on: NaiveDate,
    pub headline: ReportHeadline,
    pub loans: Vec<LoanRow>,
    pub impact: ImpactSummary,
    pub compliance: ComplianceSummary,
}

impl PortfolioReport {
    pub fn build(kind: ReportKind, loans: &[Loan], generated_on: NaiveDate) -> Self {
        let metrics = PortfolioMetrics::from_loans(loans);

        Self {
            kind,
            title: kind.title(),
            audience: kind.audience(),
            generated_on,
            headline: ReportHeadline {
                total_value: metrics.total_value,
                green_loans: metrics.green_loans,
                total_loans: metrics.total_loans,
                total_co2_reduction: metrics.total_co2_reduction,
                average_green_score: metrics.average_green_score,
                green_percentage: metrics.green_percentage,
            },
            loans: loans.iter().map(loan_row).collect(),
            impact: impact_summary(loans),
            compliance: compliance_summary(loans, generated_on),
        }
    }

    /// PDF rendering is not wired up; callers surface this as an unavailable export.
    pub fn export_pdf(&self) -> Result<Vec<u8>, ReportError> {
        Err(ReportError::ExportUnavailable)
    }
}

fn loan_row(loan: &Loan) -> LoanRow {
    let category = loan.score_category();
    LoanRow {
        loan_id: loan.id.0.clone(),
        borrower: loan.borrower.clone(),
        project_type: loan.project_type.clone(),
        amount: loan.amount,
        currency: loan.currency,
        green_score: loan.green_score,
        score_band: category.band,
        score_label: category.label,
        status: loan.verification_status,
        status_label: loan.verification_status.label(),
        green_tag_id: loan.green_tag.as_ref().map(|tag| tag.id.clone()),
        documents_verified: loan.verified_document_count(),
        documents_total: loan.documents.len(),
    }
}

fn impact_summary(loans: &[Loan]) -> ImpactSummary {
    let energy_loans = loans
        .iter()
        .filter(|loan| loan.project_type.contains("Energy"))
        .count();

    let average_renewable_share = if loans.is_empty() {
        0
    } else {
        let total: f64 = loans
            .iter()
            .map(|loan| loan.esg_metrics.renewable_energy_percent)
            .sum();
        round_half_up(total / loans.len() as f64).clamp(0.0, 100.0) as u8
    };

    let total_co2_reduction: f64 = loans.iter().map(|loan| loan.esg_metrics.co2_reduction).sum();

    ImpactSummary {
        energy_loans,
        average_renewable_share,
        total_water_saved: loans.iter().map(|loan| loan.esg_metrics.water_saved).sum(),
        vehicles_equivalent: vehicles_equivalent(total_co2_reduction),
    }
}

fn compliance_summary(loans: &[Loan], today: NaiveDate) -> ComplianceSummary {
    let status_counts = VerificationStatus::ordered()
        .into_iter()
        .map(|status| StatusCount {
            status,
            status_label: status.label(),
            count: loans
                .iter()
                .filter(|loan| loan.verification_status == status)
                .count(),
        })
        .collect();

    let horizon = today + Duration::days(EXPIRY_WARNING_DAYS);
    let mut active_green_tags = 0;
    let mut tags_expiring_within_90_days = Vec::new();
    for loan in loans {
        let Some(tag) = &loan.green_tag else {
            continue;
        };
        if !tag.is_active_on(today) {
            continue;
        }
        active_green_tags += 1;
        if tag.expiry_date <= horizon {
            tags_expiring_within_90_days.push(TagExpiry {
                tag_id: tag.id.clone(),
                borrower: loan.borrower.clone(),
                expiry_date: tag.expiry_date,
            });
        }
    }
    tags_expiring_within_90_days.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date));

    ComplianceSummary {
        status_counts,
        active_green_tags,
        tags_expiring_within_90_days,
    }
}
