use super::UserQueryService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, Paginated, UserDto},
        error::ApplicationResult,
    },
    domain::{pagination::PageRequest, user::CanManageUsers},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UserQueryService {
    pub async fn list_users(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListUsersQuery,
    ) -> ApplicationResult<Paginated<UserDto>> {
        authorize(actor, &CanManageUsers, "list users")?;
        let page = self
            .user_repo
            .list(PageRequest::new(query.page, query.limit))
            .await?;
        Ok(page.into())
    }
}
