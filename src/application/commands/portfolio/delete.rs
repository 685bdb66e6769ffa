use super::PortfolioCommandService;
use crate::{
    application::{
        access::authorize,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{portfolio::PortfolioId, user::CanDeleteContent},
};

#[derive(Debug, Clone, Copy)]
pub struct DeletePortfolioItemCommand {
    pub id: i64,
}

impl PortfolioCommandService {
    pub async fn delete_item(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeletePortfolioItemCommand,
    ) -> ApplicationResult<()> {
        let actor = authorize(actor, &CanDeleteContent, "delete portfolio items")?;
        let id = PortfolioId::new(command.id)
            .map_err(|_| ApplicationError::not_found("portfolio item not found"))?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("portfolio item not found"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(portfolio_id = %id, actor_id = %actor.id, "portfolio item deleted");
        Ok(())
    }
}
