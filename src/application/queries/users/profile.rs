use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// Reads the stored account behind a token, so role changes made since
    /// the token was issued are visible.
    pub async fn profile(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<UserDto> {
        let actor = actor.ok_or_else(|| ApplicationError::unauthorized("authentication required"))?;
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;
        Ok(user.into())
    }
}
