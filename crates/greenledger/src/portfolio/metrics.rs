use super::domain::Loan;
use crate::scoring::round_half_up;
use serde::Serialize;

/// Tonnes of CO₂ a passenger vehicle emits per year.
pub const CO2_PER_VEHICLE_TONNES: f64 = 4_600.0;

/// Headline figures for the portfolio dashboard.
///
/// Amounts are summed nominally; loans in different currencies are not converted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioMetrics {
    pub total_loans: usize,
    pub total_value: f64,
    pub green_loans: usize,
    pub green_value: f64,
    pub average_green_score: u8,
    pub total_co2_reduction: f64,
    pub green_percentage: u8,
}

impl PortfolioMetrics {
    pub fn from_loans(loans: &[Loan]) -> Self {
        let total_loans = loans.len();
        let total_value = loans.iter().map(|loan| loan.amount).sum();
        let green_loans = loans.iter().filter(|loan| loan.is_green()).count();
        let green_value = loans
            .iter()
            .filter(|loan| loan.is_green())
            .map(|loan| loan.amount)
            .sum();
        let total_co2_reduction = loans.iter().map(|loan| loan.esg_metrics.co2_reduction).sum();

        Self {
            total_loans,
            total_value,
            green_loans,
            green_value,
            average_green_score: average_green_score(loans),
            total_co2_reduction,
            green_percentage: rounded_percentage(green_loans, total_loans),
        }
    }
}

/// Rounded mean score; zero for an empty portfolio.
pub fn average_green_score(loans: &[Loan]) -> u8 {
    if loans.is_empty() {
        return 0;
    }
    let total: f64 = loans.iter().map(|loan| f64::from(loan.green_score)).sum();
    round_half_up(total / loans.len() as f64).clamp(0.0, f64::from(u8::MAX)) as u8
}

/// Passenger vehicles taken off the road for a yearly CO₂ reduction, rounded.
pub fn vehicles_equivalent(total_co2_reduction: f64) -> u64 {
    let vehicles = round_half_up(total_co2_reduction / CO2_PER_VEHICLE_TONNES);
    if vehicles.is_nan() || vehicles <= 0.0 {
        0
    } else {
        vehicles as u64
    }
}

pub(crate) fn rounded_percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    round_half_up(part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0) as u8
}
