use crate::domain::contact::entity::{ContactMessage, NewContactMessage};
use crate::domain::contact::value_objects::{ContactId, ContactStatus};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub status: Option<ContactStatus>,
    pub search: Option<String>,
    pub page: PageRequest,
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stored with status UNREAD.
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage>;
    async fn find_by_id(&self, id: ContactId) -> DomainResult<Option<ContactMessage>>;
    /// Newest first.
    async fn list(&self, filter: &ContactFilter) -> DomainResult<Page<ContactMessage>>;
    async fn set_status(
        &self,
        id: ContactId,
        status: ContactStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<ContactMessage>;
    async fn delete(&self, id: ContactId) -> DomainResult<()>;
}
