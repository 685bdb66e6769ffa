use crate::domain::contact::{ContactMessage, ContactStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[schema(value_type = String, example = "UNREAD")]
    pub status: ContactStatus,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactDto {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id.into(),
            first_name: message.first_name,
            last_name: message.last_name,
            email: message.email.into(),
            phone: message.phone,
            subject: message.subject,
            message: message.message,
            status: message.status,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}
