use super::ContactCommandService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, ContactDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        contact::{ContactId, ContactStatus},
        user::CanEditContent,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateContactStatusCommand {
    pub id: i64,
    pub status: String,
}

impl ContactCommandService {
    pub async fn update_status(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateContactStatusCommand,
    ) -> ApplicationResult<ContactDto> {
        let actor = authorize(actor, &CanEditContent, "update contact messages")?;
        let id = ContactId::new(command.id)
            .map_err(|_| ApplicationError::not_found("contact message not found"))?;
        let status: ContactStatus = command.status.parse()?;

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("contact message not found"));
        }

        let updated = self.repo.set_status(id, status, self.clock.now()).await?;
        tracing::info!(contact_id = %id, actor_id = %actor.id, status = %status, "contact status changed");
        Ok(updated.into())
    }
}
