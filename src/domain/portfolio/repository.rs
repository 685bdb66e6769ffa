use crate::domain::content::{ContentFilter, Slug};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::Page;
use crate::domain::portfolio::entity::{NewPortfolioItem, PortfolioItem, PortfolioUpdate};
use crate::domain::portfolio::value_objects::PortfolioId;
use async_trait::async_trait;

#[async_trait]
pub trait PortfolioWriteRepository: Send + Sync {
    async fn insert(&self, item: NewPortfolioItem) -> DomainResult<PortfolioItem>;
    async fn update(&self, update: PortfolioUpdate) -> DomainResult<PortfolioItem>;
    async fn delete(&self, id: PortfolioId) -> DomainResult<()>;
}

#[async_trait]
pub trait PortfolioReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PortfolioId) -> DomainResult<Option<PortfolioItem>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PortfolioItem>>;
    /// `order` ascending, then newest first.
    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<PortfolioItem>>;
}
