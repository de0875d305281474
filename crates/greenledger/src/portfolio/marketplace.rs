use super::domain::Loan;
use serde::{Deserialize, Serialize};

/// Criteria applied to the marketplace listing. Every criterion is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceFilter {
    pub green_only: bool,
    pub min_score: u8,
    /// Exact sector name; `None` (or `"all"` from the query string) matches every sector.
    pub sector: Option<String>,
    /// Case-insensitive substring of the borrower or project type.
    pub search: Option<String>,
}

impl MarketplaceFilter {
    pub fn matches(&self, loan: &Loan) -> bool {
        if self.green_only && !loan.is_green() {
            return false;
        }
        if loan.green_score < self.min_score {
            return false;
        }
        if let Some(sector) = self.sector_criterion() {
            if loan.sector != sector {
                return false;
            }
        }
        if let Some(term) = self.search_criterion() {
            let borrower = loan.borrower.to_lowercase();
            let project = loan.project_type.to_lowercase();
            if !borrower.contains(&term) && !project.contains(&term) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, loans: &[Loan]) -> MarketplaceListing {
        let matching: Vec<Loan> = loans
            .iter()
            .filter(|loan| self.matches(loan))
            .cloned()
            .collect();

        MarketplaceListing {
            shown: matching.len(),
            total: loans.len(),
            loans: matching,
        }
    }

    fn sector_criterion(&self) -> Option<&str> {
        self.sector
            .as_deref()
            .map(str::trim)
            .filter(|sector| !sector.is_empty() && !sector.eq_ignore_ascii_case("all"))
    }

    fn search_criterion(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketplaceListing {
    pub loans: Vec<Loan>,
    pub shown: usize,
    pub total: usize,
}

/// Distinct sectors in first-seen order.
pub fn sectors(loans: &[Loan]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for loan in loans {
        if !seen.iter().any(|sector| sector == &loan.sector) {
            seen.push(loan.sector.clone());
        }
    }
    seen
}
