use super::PostQueryService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::PostId, user::CanViewUnpublished},
};

impl PostQueryService {
    pub async fn get_post_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<PostDto> {
        authorize(actor, &CanViewUnpublished, "read posts by id")?;
        let id = PostId::new(id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }
}
