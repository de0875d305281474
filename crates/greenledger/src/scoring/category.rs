use serde::{Deserialize, Serialize};

/// Qualitative band a green score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl ScoreBand {
    /// Bands from highest to lowest, paired with their inclusive lower bound.
    const THRESHOLDS: [(u8, Self); 4] = [
        (85, Self::Excellent),
        (70, Self::Good),
        (50, Self::Fair),
        (30, Self::Poor),
    ];

    pub const fn ordered() -> [Self; 5] {
        [
            Self::Excellent,
            Self::Good,
            Self::Fair,
            Self::Poor,
            Self::VeryPoor,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }

    pub const fn style_hint(self) -> StyleHint {
        match self {
            Self::Excellent => StyleHint::StrongPositive,
            Self::Good => StyleHint::Positive,
            Self::Fair => StyleHint::Caution,
            Self::Poor => StyleHint::Warning,
            Self::VeryPoor => StyleHint::Critical,
        }
    }
}

/// Presentation tag; the view layer maps these to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleHint {
    StrongPositive,
    Positive,
    Caution,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreCategory {
    pub band: ScoreBand,
    pub label: &'static str,
    pub style_hint: StyleHint,
}

impl From<ScoreBand> for ScoreCategory {
    fn from(band: ScoreBand) -> Self {
        Self {
            band,
            label: band.label(),
            style_hint: band.style_hint(),
        }
    }
}

pub fn classify_score(score: u8) -> ScoreCategory {
    let band = ScoreBand::THRESHOLDS
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map(|(_, band)| *band)
        .unwrap_or(ScoreBand::VeryPoor);

    band.into()
}
