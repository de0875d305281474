//! Green score computation, score classification, and the document checklist
//! required for each project category.
//!
//! Everything here is pure: the same inputs always produce the same outputs and
//! nothing fails. Degenerate metrics (negative, NaN, oversized) are clamped per
//! factor rather than rejected.

mod category;
mod metrics;
mod requirements;
mod rules;

pub use category::{classify_score, ScoreBand, ScoreCategory, StyleHint};
pub use metrics::EnvironmentalMetrics;
pub use requirements::{required_documents, ProjectCategory, BASE_REQUIREMENTS};

use serde::{Deserialize, Serialize};

/// Highest score any set of metrics can reach.
pub const MAX_GREEN_SCORE: u8 = 100;

/// Factors contributing to the composite green score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Co2Reduction,
    RenewableEnergy,
    WaterConservation,
    Certifications,
    SustainabilityGoals,
}

impl ScoreFactor {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Co2Reduction,
            Self::RenewableEnergy,
            Self::WaterConservation,
            Self::Certifications,
            Self::SustainabilityGoals,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Co2Reduction => "CO₂ Reduction",
            Self::RenewableEnergy => "Renewable Energy",
            Self::WaterConservation => "Water Conservation",
            Self::Certifications => "Certifications",
            Self::SustainabilityGoals => "Sustainability Goals",
        }
    }

    /// Maximum points the factor can contribute. The caps sum to 100.
    pub const fn cap(self) -> f64 {
        match self {
            Self::Co2Reduction => 30.0,
            Self::RenewableEnergy => 25.0,
            Self::WaterConservation => 15.0,
            Self::Certifications => 20.0,
            Self::SustainabilityGoals => 10.0,
        }
    }
}

/// Capped contribution of a single factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub max_points: f64,
    pub notes: String,
}

/// Score plus the per-factor trail it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub raw_total: f64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    pub fn category(&self) -> ScoreCategory {
        classify_score(self.score)
    }

    pub fn points_for(&self, factor: ScoreFactor) -> f64 {
        self.components
            .iter()
            .find(|component| component.factor == factor)
            .map(|component| component.points)
            .unwrap_or(0.0)
    }
}

pub fn score_breakdown(metrics: &EnvironmentalMetrics) -> ScoreBreakdown {
    let (components, raw_total) = rules::score_metrics(metrics);
    let score = round_half_up(raw_total).clamp(0.0, f64::from(MAX_GREEN_SCORE)) as u8;

    ScoreBreakdown {
        score,
        raw_total,
        components,
    }
}

pub fn compute_green_score(metrics: &EnvironmentalMetrics) -> u8 {
    score_breakdown(metrics).score
}

/// Rounds to the nearest integer with exact halves going up (`2.5 -> 3`, `-2.5 -> -2`).
///
/// Compares the fractional part directly; `(value + 0.5).floor()` would carry
/// values just below a half (e.g. `0.49999999999999994`) up to the next integer.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar_farm_metrics() -> EnvironmentalMetrics {
        EnvironmentalMetrics {
            co2_reduction: 85_000.0,
            renewable_energy_percent: 100.0,
            water_saved: 12_000.0,
            certifications: vec![
                "ISO 14001".to_string(),
                "Solar Energy Certification".to_string(),
                "Carbon Neutral".to_string(),
            ],
            sustainability_goals: vec![
                "Net Zero by 2030".to_string(),
                "Community Solar Access".to_string(),
                "Job Creation".to_string(),
            ],
            impact_description: "Large-scale solar farm".to_string(),
        }
    }

    #[test]
    fn solar_farm_scores_seventy_five() {
        let breakdown = score_breakdown(&solar_farm_metrics());

        assert_eq!(breakdown.points_for(ScoreFactor::Co2Reduction), 25.5);
        assert_eq!(breakdown.points_for(ScoreFactor::RenewableEnergy), 25.0);
        assert_eq!(breakdown.points_for(ScoreFactor::Certifications), 15.0);
        assert_eq!(breakdown.points_for(ScoreFactor::SustainabilityGoals), 6.0);
        assert!((breakdown.raw_total - 75.1).abs() < 1e-9);
        assert_eq!(breakdown.score, 75);
        assert_eq!(breakdown.category().label, "Good");
    }

    #[test]
    fn all_zero_metrics_score_zero() {
        assert_eq!(compute_green_score(&EnvironmentalMetrics::default()), 0);
    }

    #[test]
    fn maxed_metrics_score_one_hundred() {
        let metrics = EnvironmentalMetrics {
            co2_reduction: 1_000_000.0,
            renewable_energy_percent: 250.0,
            water_saved: 900_000.0,
            certifications: vec!["cert".to_string(); 10],
            sustainability_goals: vec!["goal".to_string(); 10],
            impact_description: String::new(),
        };
        assert_eq!(compute_green_score(&metrics), MAX_GREEN_SCORE);
    }

    #[test]
    fn exact_halves_round_up() {
        let half_point = EnvironmentalMetrics {
            renewable_energy_percent: 2.0,
            ..EnvironmentalMetrics::default()
        };
        assert_eq!(score_breakdown(&half_point).raw_total, 0.5);
        assert_eq!(compute_green_score(&half_point), 1);

        let one_and_a_half = EnvironmentalMetrics {
            co2_reduction: 5_000.0,
            ..EnvironmentalMetrics::default()
        };
        assert_eq!(compute_green_score(&one_and_a_half), 2);

        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn totals_just_below_a_half_round_down() {
        let almost_half = EnvironmentalMetrics {
            renewable_energy_percent: 1.9999999999999998,
            ..EnvironmentalMetrics::default()
        };
        let breakdown = score_breakdown(&almost_half);

        assert!(breakdown.raw_total < 0.5);
        assert_eq!(breakdown.score, 0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(74.49999999999999), 74.0);
    }

    #[test]
    fn degenerate_inputs_stay_in_range() {
        let cases = [
            (-1.0, -1.0, -1.0),
            (f64::NAN, f64::NAN, f64::NAN),
            (f64::INFINITY, f64::INFINITY, f64::INFINITY),
            (f64::MAX, -f64::MAX, 0.0),
        ];
        for (co2, renewable, water) in cases {
            let metrics = EnvironmentalMetrics {
                co2_reduction: co2,
                renewable_energy_percent: renewable,
                water_saved: water,
                ..EnvironmentalMetrics::default()
            };
            let score = compute_green_score(&metrics);
            assert!(score <= MAX_GREEN_SCORE, "score {score} out of range");
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let metrics = solar_farm_metrics();
        assert_eq!(score_breakdown(&metrics), score_breakdown(&metrics));
    }

    #[test]
    fn factor_caps_sum_to_max_score() {
        let total: f64 = ScoreFactor::ordered()
            .into_iter()
            .map(ScoreFactor::cap)
            .sum();
        assert_eq!(total, f64::from(MAX_GREEN_SCORE));
    }
}
