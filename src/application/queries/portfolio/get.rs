use super::PortfolioQueryService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, PortfolioItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{content::Slug, portfolio::PortfolioId, user::CanViewUnpublished},
};

impl PortfolioQueryService {
    pub async fn get_item_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<PortfolioItemDto> {
        authorize(actor, &CanViewUnpublished, "read portfolio items by id")?;
        let id = PortfolioId::new(id)
            .map_err(|_| ApplicationError::not_found("portfolio item not found"))?;
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("portfolio item not found"))?;
        Ok(item.into())
    }

    pub async fn get_published_item(&self, slug: &str) -> ApplicationResult<PortfolioItemDto> {
        let slug = Slug::new(slug)
            .map_err(|_| ApplicationError::not_found("portfolio item not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|item| item.status.is_published())
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("portfolio item not found"))
    }
}
