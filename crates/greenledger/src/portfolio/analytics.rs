use super::domain::Loan;
use super::metrics::{average_green_score, rounded_percentage, vehicles_equivalent};
use serde::Serialize;

const CO2_LABEL_CHARS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorBreakdown {
    pub sector: String,
    pub count: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBucket {
    pub range: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldPoint {
    pub borrower: String,
    pub score: u8,
    /// Interest rate in percent.
    pub yield_pct: f64,
    pub amount_millions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Co2Point {
    pub name: String,
    pub co2_kilotons: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsHeadline {
    pub total_value: f64,
    pub average_score: u8,
    pub total_co2_reduction: f64,
    pub green_loans: usize,
    pub green_percentage: u8,
    /// Passenger vehicles removed from the road for the total CO₂ reduction.
    pub vehicles_equivalent: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioAnalytics {
    pub headline: AnalyticsHeadline,
    pub sectors: Vec<SectorBreakdown>,
    pub score_distribution: Vec<ScoreBucket>,
    pub yield_vs_score: Vec<YieldPoint>,
    pub co2_by_loan: Vec<Co2Point>,
}

impl PortfolioAnalytics {
    pub fn from_loans(loans: &[Loan]) -> Self {
        let total_co2_reduction = loans.iter().map(|loan| loan.esg_metrics.co2_reduction).sum();
        let green_loans = loans.iter().filter(|loan| loan.is_green()).count();

        Self {
            headline: AnalyticsHeadline {
                total_value: loans.iter().map(|loan| loan.amount).sum(),
                average_score: average_green_score(loans),
                total_co2_reduction,
                green_loans,
                green_percentage: rounded_percentage(green_loans, loans.len()),
                vehicles_equivalent: vehicles_equivalent(total_co2_reduction),
            },
            sectors: sector_breakdown(loans),
            score_distribution: score_distribution(loans),
            yield_vs_score: yield_vs_score(loans),
            co2_by_loan: co2_by_loan(loans),
        }
    }
}

pub fn sector_breakdown(loans: &[Loan]) -> Vec<SectorBreakdown> {
    let mut breakdown: Vec<SectorBreakdown> = Vec::new();
    for loan in loans {
        match breakdown.iter_mut().find(|entry| entry.sector == loan.sector) {
            Some(entry) => {
                entry.count += 1;
                entry.value += loan.amount;
            }
            None => breakdown.push(SectorBreakdown {
                sector: loan.sector.clone(),
                count: 1,
                value: loan.amount,
            }),
        }
    }
    breakdown
}

/// Buckets are lower-inclusive and upper-exclusive, except the last which is open.
pub fn score_distribution(loans: &[Loan]) -> Vec<ScoreBucket> {
    const BUCKETS: [(&str, u8, Option<u8>); 5] = [
        ("0-30", 0, Some(30)),
        ("30-50", 30, Some(50)),
        ("50-70", 50, Some(70)),
        ("70-85", 70, Some(85)),
        ("85-100", 85, None),
    ];

    BUCKETS
        .iter()
        .map(|(range, lower, upper)| ScoreBucket {
            range: *range,
            count: loans
                .iter()
                .filter(|loan| {
                    loan.green_score >= *lower && upper.map_or(true, |upper| loan.green_score < upper)
                })
                .count(),
        })
        .collect()
}

pub fn yield_vs_score(loans: &[Loan]) -> Vec<YieldPoint> {
    loans
        .iter()
        .map(|loan| YieldPoint {
            borrower: loan.borrower.clone(),
            score: loan.green_score,
            yield_pct: loan.interest_rate,
            amount_millions: loan.amount / 1_000_000.0,
        })
        .collect()
}

pub fn co2_by_loan(loans: &[Loan]) -> Vec<Co2Point> {
    loans
        .iter()
        .map(|loan| Co2Point {
            name: loan.borrower.chars().take(CO2_LABEL_CHARS).collect(),
            co2_kilotons: loan.esg_metrics.co2_reduction / 1_000.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::sample_portfolio;

    #[test]
    fn sectors_aggregate_count_and_value() {
        let breakdown = sector_breakdown(&sample_portfolio());
        let renewable = breakdown
            .iter()
            .find(|entry| entry.sector == "Renewable Energy")
            .expect("renewable sector present");
        assert_eq!(renewable.count, 2);
        assert_eq!(renewable.value, 13_000_000.0);
        assert_eq!(breakdown.len(), 4);
    }

    #[test]
    fn score_distribution_uses_half_open_bands() {
        let mut loans = sample_portfolio();
        loans[0].green_score = 85;
        loans[1].green_score = 70;
        loans[2].green_score = 30;
        loans[3].green_score = 29;
        loans[4].green_score = 50;

        let counts: Vec<usize> = score_distribution(&loans)
            .into_iter()
            .map(|bucket| bucket.count)
            .collect();
        assert_eq!(counts, vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn sample_distribution_matches_dashboard() {
        let buckets = score_distribution(&sample_portfolio());
        let by_range: Vec<(&str, usize)> = buckets
            .iter()
            .map(|bucket| (bucket.range, bucket.count))
            .collect();
        assert_eq!(
            by_range,
            vec![("0-30", 0), ("30-50", 0), ("50-70", 1), ("70-85", 2), ("85-100", 2)]
        );
    }

    #[test]
    fn co2_labels_are_truncated() {
        let points = co2_by_loan(&sample_portfolio());
        assert_eq!(points[1].name, "GreenBuild Cons");
        assert_eq!(points[0].co2_kilotons, 85.0);
    }

    #[test]
    fn headline_reuses_portfolio_figures() {
        let analytics = PortfolioAnalytics::from_loans(&sample_portfolio());
        assert_eq!(analytics.headline.average_score, 79);
        assert_eq!(analytics.headline.green_loans, 3);
        assert_eq!(analytics.headline.green_percentage, 60);
        assert_eq!(analytics.headline.vehicles_equivalent, 67);
        assert_eq!(analytics.yield_vs_score[2].amount_millions, 8.0);
    }
}
