use serde::{Deserialize, Serialize};

/// Environmental inputs reported for a loan's underlying project.
///
/// Fields are accepted as supplied. Missing values deserialize to zero or an
/// empty list and out-of-range values are clamped by the scoring rules rather
/// than rejected here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalMetrics {
    /// Tons of CO₂ avoided per year.
    pub co2_reduction: f64,
    /// Share of energy drawn from renewable sources, 0-100.
    pub renewable_energy_percent: f64,
    /// Cubic meters of water saved per year.
    pub water_saved: f64,
    pub certifications: Vec<String>,
    pub sustainability_goals: Vec<String>,
    pub impact_description: String,
}

impl EnvironmentalMetrics {
    /// Split a comma separated form value into trimmed entries, dropping blanks.
    pub fn parse_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }
}
