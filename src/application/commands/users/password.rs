use crate::domain::errors::{DomainError, DomainResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

pub(super) fn validate_password(password: &str) -> DomainResult<()> {
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(DomainError::validation(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(DomainError::validation(
            "password",
            format!("password must be at most {MAX_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(())
}
