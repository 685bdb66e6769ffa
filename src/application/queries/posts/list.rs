use super::PostQueryService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, Paginated, PostDto},
        error::ApplicationResult,
        listing::{ListContentQuery, resolve_content_filter},
    },
    domain::user::CanViewUnpublished,
};

impl PostQueryService {
    /// Newest first. Anonymous and USER callers only ever see PUBLISHED posts.
    pub async fn list_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListContentQuery,
    ) -> ApplicationResult<Paginated<PostDto>> {
        let filter = resolve_content_filter(actor, query)?;
        let page = self.read_repo.list(&filter).await?;
        Ok(page.into())
    }

    /// Public blog listing. The caller is never consulted, so a signed-in
    /// editor gets the same PUBLISHED-only view as a visitor.
    pub async fn list_published_posts(
        &self,
        query: ListContentQuery,
    ) -> ApplicationResult<Paginated<PostDto>> {
        self.list_posts(None, query).await
    }

    /// Back-office listing: every status is visible, but only to editors.
    pub async fn list_posts_for_admin(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListContentQuery,
    ) -> ApplicationResult<Paginated<PostDto>> {
        authorize(actor, &CanViewUnpublished, "manage posts")?;
        self.list_posts(actor, query).await
    }
}
