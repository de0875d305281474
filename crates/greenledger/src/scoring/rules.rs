use super::metrics::EnvironmentalMetrics;
use super::{ScoreComponent, ScoreFactor};

const CO2_REFERENCE_TONS: f64 = 100_000.0;
const WATER_REFERENCE_CUBIC_METERS: f64 = 50_000.0;
const RENEWABLE_REFERENCE_PERCENT: f64 = 100.0;
const POINTS_PER_CERTIFICATION: f64 = 5.0;
const POINTS_PER_GOAL: f64 = 2.0;

/// Scores each factor independently, returning the components and their raw sum.
pub(crate) fn score_metrics(metrics: &EnvironmentalMetrics) -> (Vec<ScoreComponent>, f64) {
    let co2 = scaled(
        metrics.co2_reduction,
        CO2_REFERENCE_TONS,
        ScoreFactor::Co2Reduction,
    );
    let renewable = scaled(
        metrics.renewable_energy_percent,
        RENEWABLE_REFERENCE_PERCENT,
        ScoreFactor::RenewableEnergy,
    );
    let water = scaled(
        metrics.water_saved,
        WATER_REFERENCE_CUBIC_METERS,
        ScoreFactor::WaterConservation,
    );
    let certifications = counted(
        metrics.certifications.len(),
        POINTS_PER_CERTIFICATION,
        ScoreFactor::Certifications,
    );
    let goals = counted(
        metrics.sustainability_goals.len(),
        POINTS_PER_GOAL,
        ScoreFactor::SustainabilityGoals,
    );

    let components = vec![
        ScoreComponent {
            factor: ScoreFactor::Co2Reduction,
            points: co2,
            max_points: ScoreFactor::Co2Reduction.cap(),
            notes: format!("{:.0} t CO₂ avoided per year", metrics.co2_reduction),
        },
        ScoreComponent {
            factor: ScoreFactor::RenewableEnergy,
            points: renewable,
            max_points: ScoreFactor::RenewableEnergy.cap(),
            notes: format!(
                "{:.0}% renewable energy share",
                metrics.renewable_energy_percent
            ),
        },
        ScoreComponent {
            factor: ScoreFactor::WaterConservation,
            points: water,
            max_points: ScoreFactor::WaterConservation.cap(),
            notes: format!("{:.0} m³ water saved per year", metrics.water_saved),
        },
        ScoreComponent {
            factor: ScoreFactor::Certifications,
            points: certifications,
            max_points: ScoreFactor::Certifications.cap(),
            notes: format!("{} certification(s)", metrics.certifications.len()),
        },
        ScoreComponent {
            factor: ScoreFactor::SustainabilityGoals,
            points: goals,
            max_points: ScoreFactor::SustainabilityGoals.cap(),
            notes: format!(
                "{} sustainability goal(s)",
                metrics.sustainability_goals.len()
            ),
        },
    ];

    let raw_total = components.iter().map(|component| component.points).sum();
    (components, raw_total)
}

/// `value / reference * cap`, multiplied first so exact inputs stay exact.
fn scaled(value: f64, reference: f64, factor: ScoreFactor) -> f64 {
    let cap = factor.cap();
    clamp_to_cap(value * cap / reference, cap)
}

fn counted(count: usize, points_each: f64, factor: ScoreFactor) -> f64 {
    clamp_to_cap(count as f64 * points_each, factor.cap())
}

// NaN would survive f64::clamp, so it is mapped to zero first.
fn clamp_to_cap(points: f64, cap: f64) -> f64 {
    if points.is_nan() {
        0.0
    } else {
        points.clamp(0.0, cap)
    }
}
