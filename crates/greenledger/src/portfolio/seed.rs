use super::domain::{
    Currency, GreenTag, Loan, LoanDocument, LoanId, VerificationStatus,
};
use crate::scoring::EnvironmentalMetrics;
use chrono::NaiveDate;

const SEED_VERIFIER: &str = "ESG Verification Corp";

/// Demo portfolio served by the in-memory loan repository.
pub fn sample_portfolio() -> Vec<Loan> {
    vec![
        Loan {
            id: loan_id("LN-2026-001"),
            borrower: "SolarTech Industries".to_string(),
            amount: 5_000_000.0,
            currency: Currency::Usd,
            project_type: "Solar Energy".to_string(),
            sector: "Renewable Energy".to_string(),
            maturity_date: date(2031, 12, 31),
            interest_rate: 4.5,
            green_score: 92,
            green_tag: Some(tag("GT-001", "LN-2026-001", 92, date(2026, 1, 5))),
            verification_status: VerificationStatus::Verified,
            esg_metrics: metrics(
                85_000.0,
                100.0,
                12_000.0,
                &["ISO 14001", "Solar Energy Certification", "Carbon Neutral"],
                &["Net Zero by 2030", "Community Solar Access", "Job Creation"],
                "Large-scale solar farm providing clean energy to 15,000 homes",
            ),
            documents: vec![
                document("DOC-001", "Environmental Impact Assessment.pdf", "PDF", date(2026, 1, 2), true),
                document("DOC-002", "Solar Panel Specifications.pdf", "PDF", date(2026, 1, 2), true),
                document("DOC-003", "Carbon Footprint Analysis.xlsx", "Excel", date(2026, 1, 3), true),
            ],
            created_at: date(2026, 1, 1),
            updated_at: date(2026, 1, 5),
        },
        Loan {
            id: loan_id("LN-2026-002"),
            borrower: "GreenBuild Construction".to_string(),
            amount: 3_500_000.0,
            currency: Currency::Eur,
            project_type: "Green Building".to_string(),
            sector: "Real Estate".to_string(),
            maturity_date: date(2030, 6, 30),
            interest_rate: 5.2,
            green_score: 78,
            green_tag: Some(tag("GT-002", "LN-2026-002", 78, date(2026, 1, 6))),
            verification_status: VerificationStatus::Verified,
            esg_metrics: metrics(
                45_000.0,
                65.0,
                28_000.0,
                &["LEED Gold", "BREEAM Excellent"],
                &["Energy Efficiency", "Water Conservation", "Sustainable Materials"],
                "LEED Gold certified office complex with advanced energy systems",
            ),
            documents: vec![
                document("DOC-004", "LEED Certification.pdf", "PDF", date(2026, 1, 3), true),
                document("DOC-005", "Energy Efficiency Report.pdf", "PDF", date(2026, 1, 4), true),
            ],
            created_at: date(2026, 1, 2),
            updated_at: date(2026, 1, 6),
        },
        Loan {
            id: loan_id("LN-2026-003"),
            borrower: "WindPower Solutions".to_string(),
            amount: 8_000_000.0,
            currency: Currency::Gbp,
            project_type: "Wind Energy".to_string(),
            sector: "Renewable Energy".to_string(),
            maturity_date: date(2033, 12, 31),
            interest_rate: 4.8,
            green_score: 88,
            green_tag: None,
            verification_status: VerificationStatus::InReview,
            esg_metrics: metrics(
                120_000.0,
                100.0,
                5_000.0,
                &["ISO 14001", "Wind Energy Certification"],
                &["Clean Energy Generation", "Biodiversity Protection"],
                "Offshore wind farm generating 50MW of clean energy",
            ),
            documents: vec![
                document("DOC-006", "Environmental Clearance.pdf", "PDF", date(2026, 1, 5), false),
                document("DOC-007", "Wind Turbine Certifications.pdf", "PDF", date(2026, 1, 6), true),
            ],
            created_at: date(2026, 1, 4),
            updated_at: date(2026, 1, 7),
        },
        Loan {
            id: loan_id("LN-2026-004"),
            borrower: "EcoTransport Ltd".to_string(),
            amount: 2_000_000.0,
            currency: Currency::Usd,
            project_type: "Electric Vehicles".to_string(),
            sector: "Transportation".to_string(),
            maturity_date: date(2029, 3, 31),
            interest_rate: 5.5,
            green_score: 72,
            green_tag: Some(tag("GT-003", "LN-2026-004", 72, date(2026, 1, 7))),
            verification_status: VerificationStatus::Verified,
            esg_metrics: metrics(
                35_000.0,
                80.0,
                2_000.0,
                &["ISO 14001"],
                &["Zero Emission Fleet", "Urban Air Quality"],
                "Electric bus fleet for urban public transportation",
            ),
            documents: vec![
                document("DOC-008", "EV Fleet Details.pdf", "PDF", date(2026, 1, 5), true),
                document("DOC-009", "Charging Infrastructure Plan.pdf", "PDF", date(2026, 1, 6), true),
            ],
            created_at: date(2026, 1, 5),
            updated_at: date(2026, 1, 7),
        },
        Loan {
            id: loan_id("LN-2026-005"),
            borrower: "RecycleMax Corp".to_string(),
            amount: 1_500_000.0,
            currency: Currency::Usd,
            project_type: "Waste Management".to_string(),
            sector: "Environmental Services".to_string(),
            maturity_date: date(2028, 12, 31),
            interest_rate: 6.0,
            green_score: 65,
            green_tag: None,
            verification_status: VerificationStatus::Pending,
            esg_metrics: metrics(
                22_000.0,
                40.0,
                18_000.0,
                &["ISO 14001"],
                &["Circular Economy", "Waste Reduction"],
                "Advanced recycling facility processing 50,000 tons annually",
            ),
            documents: vec![document(
                "DOC-010",
                "Waste Reduction Metrics.xlsx",
                "Excel",
                date(2026, 1, 7),
                false,
            )],
            created_at: date(2026, 1, 6),
            updated_at: date(2026, 1, 7),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn loan_id(raw: &str) -> LoanId {
    LoanId(raw.to_string())
}

fn tag(id: &str, loan: &str, score: u8, issued_date: NaiveDate) -> GreenTag {
    GreenTag {
        id: id.to_string(),
        loan_id: Some(loan_id(loan)),
        score,
        issued_date,
        verified_by: SEED_VERIFIER.to_string(),
        expiry_date: issued_date
            .checked_add_months(chrono::Months::new(12))
            .unwrap_or(issued_date),
        immutable: true,
    }
}

fn metrics(
    co2_reduction: f64,
    renewable_energy_percent: f64,
    water_saved: f64,
    certifications: &[&str],
    sustainability_goals: &[&str],
    impact_description: &str,
) -> EnvironmentalMetrics {
    EnvironmentalMetrics {
        co2_reduction,
        renewable_energy_percent,
        water_saved,
        certifications: certifications.iter().map(|s| s.to_string()).collect(),
        sustainability_goals: sustainability_goals.iter().map(|s| s.to_string()).collect(),
        impact_description: impact_description.to_string(),
    }
}

fn document(id: &str, name: &str, kind: &str, upload_date: NaiveDate, verified: bool) -> LoanDocument {
    LoanDocument {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        upload_date,
        verified,
    }
}
