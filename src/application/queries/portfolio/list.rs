use super::PortfolioQueryService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, Paginated, PortfolioItemDto},
        error::ApplicationResult,
        listing::{ListContentQuery, resolve_content_filter},
    },
    domain::user::CanViewUnpublished,
};

impl PortfolioQueryService {
    /// Ordered by `order` ascending, newest first within the same order.
    pub async fn list_items(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListContentQuery,
    ) -> ApplicationResult<Paginated<PortfolioItemDto>> {
        let filter = resolve_content_filter(actor, query)?;
        let page = self.read_repo.list(&filter).await?;
        Ok(page.into())
    }

    /// Public portfolio listing, PUBLISHED only whoever is asking.
    pub async fn list_published_items(
        &self,
        query: ListContentQuery,
    ) -> ApplicationResult<Paginated<PortfolioItemDto>> {
        self.list_items(None, query).await
    }

    pub async fn list_items_for_admin(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListContentQuery,
    ) -> ApplicationResult<Paginated<PortfolioItemDto>> {
        authorize(actor, &CanViewUnpublished, "manage portfolio items")?;
        self.list_items(actor, query).await
    }
}
