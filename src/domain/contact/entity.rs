use crate::domain::contact::value_objects::{ContactId, ContactStatus};
use crate::domain::user::Email;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
