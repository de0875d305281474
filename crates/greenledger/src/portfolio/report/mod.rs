mod summary;
pub mod views;

pub use summary::PortfolioReport;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Audience-specific report flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Esg,
    Portfolio,
    Compliance,
}

impl ReportKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Esg, Self::Portfolio, Self::Compliance]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Esg => "esg",
            Self::Portfolio => "portfolio",
            Self::Compliance => "compliance",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Esg => "ESG Impact Report",
            Self::Portfolio => "Portfolio Summary",
            Self::Compliance => "Compliance Report",
        }
    }

    pub const fn audience(self) -> &'static str {
        match self {
            Self::Esg => "Environmental, social & governance metrics",
            Self::Portfolio => "Loan performance & distribution",
            Self::Compliance => "Regulatory & audit trail",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.slug() == normalized)
            .ok_or_else(|| ReportError::UnknownKind(raw.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unknown report kind '{0}' (expected esg, portfolio, or compliance)")]
    UnknownKind(String),
    #[error("report export is not available in this deployment")]
    ExportUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!("ESG".parse::<ReportKind>().expect("esg"), ReportKind::Esg);
        assert_eq!(
            " compliance ".parse::<ReportKind>().expect("compliance"),
            ReportKind::Compliance
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "quarterly".parse::<ReportKind>().expect_err("unknown kind");
        assert!(matches!(err, ReportError::UnknownKind(raw) if raw == "quarterly"));
    }
}
