use super::UserCommandService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::value_objects::optional_text,
        user::{CanManageUsers, Role, UserId, UserUpdate},
    },
};

#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub user_id: i64,
    /// A blank name clears it.
    pub name: Option<String>,
    pub role: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let actor = authorize(actor, &CanManageUsers, "manage users")?;
        let user_id = UserId::new(command.user_id)
            .map_err(|_| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(user_id);
        if let Some(name) = command.name {
            update = update.with_name(optional_text(Some(name)));
        }
        if let Some(raw) = optional_text(command.role) {
            let role: Role = raw.parse()?;
            if user_id == actor.id && role != actor.role {
                return Err(ApplicationError::validation(
                    "role",
                    "administrators cannot change their own role",
                ));
            }
            update = update.with_role(role);
        }
        if update.is_empty() {
            return Err(ApplicationError::validation(
                "payload",
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        tracing::info!(user_id = %user.id, actor_id = %actor.id, role = %user.role, "user updated");
        Ok(user.into())
    }
}
