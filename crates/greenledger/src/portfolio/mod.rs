//! Loan portfolio model plus the dashboard, marketplace, analytics, and
//! reporting views computed over it.

pub mod analytics;
pub mod domain;
pub mod marketplace;
pub mod metrics;
pub mod report;
pub mod repository;
pub mod router;
mod seed;

pub use analytics::PortfolioAnalytics;
pub use domain::{Currency, GreenTag, Loan, LoanDocument, LoanId, VerificationStatus};
pub use marketplace::{sectors, MarketplaceFilter, MarketplaceListing};
pub use metrics::PortfolioMetrics;
pub use report::{PortfolioReport, ReportError, ReportKind};
pub use repository::{LoanRepository, RepositoryError};
pub use router::{portfolio_router, LoanDetailView};
pub use seed::sample_portfolio;
