use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_PORTFOLIO_SLUG: &str = "portfolio_slug_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_PORTFOLIO_AUTHOR: &str = "portfolio_author_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG | CNT_PORTFOLIO_SLUG => {
                        DomainError::SlugTaken(String::from("requested slug"))
                    }
                    CNT_USER_EMAIL => DomainError::Conflict("email is already registered".into()),
                    CNT_POST_AUTHOR | CNT_PORTFOLIO_AUTHOR => DomainError::Conflict(
                        "author is missing or still referenced by content".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => return DomainError::Conflict("unique constraint violated".into()),
                    "23503" => {
                        return DomainError::Conflict("referenced record constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::validation("payload", "check constraint violated");
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Like [`map_sqlx`], naming the slug a write tried to claim when the unique
/// index rejects it.
pub(super) fn map_slug_write(slug: &str) -> impl Fn(sqlx::Error) -> DomainError + '_ {
    move |err| match map_sqlx(err) {
        DomainError::SlugTaken(_) => DomainError::SlugTaken(slug.to_string()),
        other => other,
    }
}
