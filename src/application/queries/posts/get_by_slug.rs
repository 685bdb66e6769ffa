use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::Slug,
};

impl PostQueryService {
    /// Public lookup: drafts and archived posts are reported as missing.
    pub async fn get_published_post(&self, slug: &str) -> ApplicationResult<PostDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("post not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.status.is_published())
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }
}
