use super::{
    error::map_sqlx,
    query::{push_page, push_search, to_total},
};
use crate::domain::contact::{
    ContactFilter, ContactId, ContactMessage, ContactRepository, ContactStatus, NewContactMessage,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::Page;
use crate::domain::user::Email;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CONTACT_COLUMNS: &str =
    "id, first_name, last_name, email, phone, subject, message, status, created_at, updated_at";
const SEARCH_COLUMNS: [&str; 4] = ["first_name", "last_name", "email", "subject"];

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContactRow> for ContactMessage {
    type Error = DomainError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        Ok(ContactMessage {
            id: ContactId::new(row.id)?,
            first_name: row.first_name,
            last_name: row.last_name,
            email: Email::new(row.email)?,
            phone: row.phone,
            subject: row.subject,
            message: row.message,
            status: row.status.parse::<ContactStatus>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ContactFilter) {
        let mut has_where = false;
        if let Some(status) = filter.status {
            builder.push(" WHERE status = ");
            builder.push_bind(status.as_str());
            has_where = true;
        }
        if let Some(search) = &filter.search {
            builder.push(if has_where { " AND " } else { " WHERE " });
            push_search(builder, search, &SEARCH_COLUMNS);
        }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let sql = format!(
            "INSERT INTO contacts (first_name, last_name, email, phone, subject, message, status, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) \
             RETURNING {CONTACT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContactRow>(&sql)
            .bind(&message.first_name)
            .bind(&message.last_name)
            .bind(message.email.as_str())
            .bind(message.phone.as_deref())
            .bind(&message.subject)
            .bind(&message.message)
            .bind(ContactStatus::Unread.as_str())
            .bind(message.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        ContactMessage::try_from(row)
    }

    async fn find_by_id(&self, id: ContactId) -> DomainResult<Option<ContactMessage>> {
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1");
        let row = sqlx::query_as::<_, ContactRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ContactMessage::try_from).transpose()
    }

    async fn list(&self, filter: &ContactFilter) -> DomainResult<Page<ContactMessage>> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM contacts");
        Self::push_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        select.push(CONTACT_COLUMNS);
        select.push(" FROM contacts");
        Self::push_filter(&mut select, filter);
        select.push(" ORDER BY created_at DESC, id DESC");
        push_page(&mut select, &filter.page);

        let rows = select
            .build_query_as::<ContactRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let messages = rows
            .into_iter()
            .map(ContactMessage::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(messages, to_total(total), filter.page))
    }

    async fn set_status(
        &self,
        id: ContactId,
        status: ContactStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<ContactMessage> {
        let sql = format!(
            "UPDATE contacts SET status = $1, updated_at = $2 WHERE id = $3 RETURNING {CONTACT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContactRow>(&sql)
            .bind(status.as_str())
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("contact message not found".into()))?;

        ContactMessage::try_from(row)
    }

    async fn delete(&self, id: ContactId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("contact message not found".into()));
        }
        Ok(())
    }
}
