use super::PostCommandService;
use crate::{
    application::{
        access::authorize,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::PostId, user::CanDeleteContent},
};

#[derive(Debug, Clone, Copy)]
pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let actor = authorize(actor, &CanDeleteContent, "delete posts")?;
        let id = PostId::new(command.id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("post not found"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = %id, actor_id = %actor.id, "post deleted");
        Ok(())
    }
}
