use super::domain::{Loan, LoanId};

/// Source of loan records; the service layer decides where they live.
pub trait LoanRepository: Send + Sync {
    fn all(&self) -> Result<Vec<Loan>, RepositoryError>;
    fn fetch(&self, id: &LoanId) -> Result<Option<Loan>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
