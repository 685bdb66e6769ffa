use super::UserCommandService;
use crate::{
    application::{
        access::authorize,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{CanManageUsers, UserId},
};

#[derive(Debug, Clone, Copy)]
pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    pub async fn delete_user(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        let actor = authorize(actor, &CanManageUsers, "manage users")?;
        let user_id = UserId::new(command.user_id)
            .map_err(|_| ApplicationError::not_found("user not found"))?;
        if user_id == actor.id {
            return Err(ApplicationError::validation(
                "id",
                "administrators cannot delete their own account",
            ));
        }
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }

        self.user_repo.delete(user_id).await?;
        tracing::info!(user_id = %user_id, actor_id = %actor.id, "user deleted");
        Ok(())
    }
}
