use super::ContactQueryService;
use crate::{
    application::{
        access::authorize,
        dto::{AuthenticatedUser, ContactDto, Paginated},
        error::ApplicationResult,
    },
    domain::{
        contact::{ContactFilter, ContactStatus},
        content::value_objects::optional_text,
        pagination::PageRequest,
        user::CanEditContent,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListContactsQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ContactQueryService {
    /// Newest first.
    pub async fn list_contacts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListContactsQuery,
    ) -> ApplicationResult<Paginated<ContactDto>> {
        authorize(actor, &CanEditContent, "read contact messages")?;
        let status = optional_text(query.status)
            .filter(|raw| !raw.eq_ignore_ascii_case("all"))
            .map(|raw| raw.parse::<ContactStatus>())
            .transpose()?;
        let filter = ContactFilter {
            status,
            search: optional_text(query.search),
            page: PageRequest::new(query.page, query.limit),
        };
        let page = self.repo.list(&filter).await?;
        Ok(page.into())
    }
}
