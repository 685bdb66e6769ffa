use super::ContactCommandService;
use crate::{
    application::{
        access::authorize,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{contact::ContactId, user::CanDeleteContent},
};

#[derive(Debug, Clone, Copy)]
pub struct DeleteContactCommand {
    pub id: i64,
}

impl ContactCommandService {
    pub async fn delete(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteContactCommand,
    ) -> ApplicationResult<()> {
        let actor = authorize(actor, &CanDeleteContent, "delete contact messages")?;
        let id = ContactId::new(command.id)
            .map_err(|_| ApplicationError::not_found("contact message not found"))?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("contact message not found"));
        }

        self.repo.delete(id).await?;
        tracing::info!(contact_id = %id, actor_id = %actor.id, "contact message deleted");
        Ok(())
    }
}
