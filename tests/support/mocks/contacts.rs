// tests/support/mocks/contacts.rs
use agency_cms::domain::contact::{
    ContactFilter, ContactId, ContactMessage, ContactRepository, ContactStatus, NewContactMessage,
};
use agency_cms::domain::errors::{DomainError, DomainResult};
use agency_cms::domain::pagination::Page;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryContactRepo {
    rows: Mutex<Vec<ContactMessage>>,
}

impl InMemoryContactRepo {
    pub fn snapshot(&self) -> Vec<ContactMessage> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepo {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|m| m.id.0).max().unwrap_or(0) + 1;
        let stored = ContactMessage {
            id: ContactId(id),
            first_name: message.first_name,
            last_name: message.last_name,
            email: message.email,
            phone: message.phone,
            subject: message.subject,
            message: message.message,
            status: ContactStatus::Unread,
            created_at: message.created_at,
            updated_at: message.created_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ContactId) -> DomainResult<Option<ContactMessage>> {
        Ok(self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self, filter: &ContactFilter) -> DomainResult<Page<ContactMessage>> {
        let mut messages: Vec<ContactMessage> = self
            .snapshot()
            .into_iter()
            .filter(|m| filter.status.is_none_or(|status| m.status == status))
            .filter(|m| {
                filter.search.as_deref().is_none_or(|term| {
                    super::matches_term(
                        &[&m.first_name, &m.last_name, m.email.as_str(), &m.subject],
                        term,
                    )
                })
            })
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(super::paginate(messages, filter.page))
    }

    async fn set_status(
        &self,
        id: ContactId,
        status: ContactStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<ContactMessage> {
        let mut rows = self.rows.lock().unwrap();
        let message = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DomainError::NotFound("contact message not found".into()))?;
        message.status = status;
        message.updated_at = updated_at;
        Ok(message.clone())
    }

    async fn delete(&self, id: ContactId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("contact message not found".into()));
        }
        Ok(())
    }
}
