use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortfolioId(pub i64);

impl PortfolioId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("id", "portfolio id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PortfolioId> for i64 {
    fn from(value: PortfolioId) -> Self {
        value.0
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The case-study narrative lists of a portfolio item, kept in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseStudy {
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub results: Vec<String>,
    pub gallery: Vec<String>,
}
