use super::ContactQueryService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, ContactDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{contact::ContactId, user::CanEditContent},
};

impl ContactQueryService {
    pub async fn get_contact(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<ContactDto> {
        authorize(actor, &CanEditContent, "read contact messages")?;
        let id = ContactId::new(id)
            .map_err(|_| ApplicationError::not_found("contact message not found"))?;
        let message = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("contact message not found"))?;
        Ok(message.into())
    }
}
