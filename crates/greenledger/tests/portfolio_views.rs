use chrono::NaiveDate;
use greenledger::portfolio::{
    sample_portfolio, MarketplaceFilter, PortfolioAnalytics, PortfolioMetrics, PortfolioReport,
    ReportError, ReportKind, VerificationStatus,
};

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 1).expect("valid report date")
}

#[test]
fn dashboard_headline_matches_seeded_book() {
    let loans = sample_portfolio();
    let metrics = PortfolioMetrics::from_loans(&loans);
    let analytics = PortfolioAnalytics::from_loans(&loans);

    assert_eq!(metrics.green_percentage, 60);
    assert_eq!(analytics.headline.total_value, metrics.total_value);
    assert_eq!(analytics.headline.average_score, metrics.average_green_score);
    assert_eq!(analytics.headline.green_percentage, metrics.green_percentage);
    assert_eq!(analytics.headline.vehicles_equivalent, 67);
    assert_eq!(
        analytics.co2_by_loan.iter().map(|point| point.co2_kilotons).sum::<f64>(),
        307.0
    );
}

#[test]
fn marketplace_filters_compose_over_the_book() {
    let loans = sample_portfolio();
    let filter = MarketplaceFilter {
        green_only: true,
        min_score: 80,
        ..MarketplaceFilter::default()
    };

    let listing = filter.apply(&loans);

    assert_eq!(listing.total, 5);
    assert_eq!(listing.shown, 1);
    assert_eq!(listing.loans[0].borrower, "SolarTech Industries");
}

#[test]
fn report_kinds_share_headline_but_differ_in_title() {
    let loans = sample_portfolio();
    let titles: Vec<&str> = ReportKind::ordered()
        .into_iter()
        .map(|kind| {
            let report = PortfolioReport::build(kind, &loans, report_date());
            assert_eq!(report.headline.total_loans, 5);
            assert_eq!(report.headline.green_loans, 3);
            assert_eq!(report.loans.len(), 5);
            report.title
        })
        .collect();

    assert_eq!(
        titles,
        vec!["ESG Impact Report", "Portfolio Summary", "Compliance Report"]
    );
}

#[test]
fn compliance_report_counts_statuses() {
    let report = PortfolioReport::build(ReportKind::Compliance, &sample_portfolio(), report_date());

    let verified = report
        .compliance
        .status_counts
        .iter()
        .find(|entry| entry.status == VerificationStatus::Verified)
        .expect("verified row present");
    assert_eq!(verified.count, 3);
    assert_eq!(
        report
            .compliance
            .status_counts
            .iter()
            .map(|entry| entry.count)
            .sum::<usize>(),
        5
    );
}

#[test]
fn report_kind_parsing_and_pdf_export() {
    assert_eq!(" ESG ".parse::<ReportKind>().ok(), Some(ReportKind::Esg));
    assert!(matches!(
        "quarterly".parse::<ReportKind>(),
        Err(ReportError::UnknownKind(raw)) if raw == "quarterly"
    ));

    let report = PortfolioReport::build(ReportKind::Esg, &sample_portfolio(), report_date());
    assert!(matches!(
        report.export_pdf(),
        Err(ReportError::ExportUnavailable)
    ));
}
