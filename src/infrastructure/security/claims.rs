// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuilds the principal from the authority facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply(&fact.predicate);
    }
    ctx.into_user()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    email: Option<String>,
    name: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn apply(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(email)]) => {
                self.user_id = Some(*id);
                self.email = Some(email.clone());
            }
            ("name", [Term::Str(name)]) => self.name = Some(name.clone()),
            ("role", [Term::Str(role)]) => self.role = role.parse().ok(),
            ("issued_at", [Term::Date(seconds)]) => self.issued_at = Some(from_epoch(*seconds)),
            ("expires_at", [Term::Date(seconds)]) => self.expires_at = Some(from_epoch(*seconds)),
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let user_id = self
            .user_id
            .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
        let email = self
            .email
            .ok_or_else(|| ApplicationError::unauthorized("missing email"))?;
        let role = self
            .role
            .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

        Ok(AuthenticatedUser {
            id: UserId::new(user_id)
                .map_err(|_| ApplicationError::unauthorized("invalid user id"))?,
            email,
            name: self.name,
            role,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }
}

fn from_epoch(seconds: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biscuit_auth::builder::fact;

    fn claims(role: &str) -> Vec<Fact> {
        vec![
            fact("user", &[Term::Integer(7), Term::Str("ed@example.com".into())]),
            fact("role", &[Term::Str(role.into())]),
            fact("issued_at", &[Term::Date(1_700_000_000)]),
            fact("expires_at", &[Term::Date(1_700_003_600)]),
        ]
    }

    #[test]
    fn parses_complete_claims() {
        let user = parse_claims(claims("EDITOR")).unwrap();
        assert_eq!(user.id, UserId(7));
        assert_eq!(user.email, "ed@example.com");
        assert_eq!(user.role, Role::Editor);
        assert_eq!(user.name, None);
        assert_eq!((user.expires_at - user.issued_at).num_seconds(), 3600);
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(matches!(
            parse_claims(claims("ROOT")),
            Err(ApplicationError::Unauthorized(msg)) if msg == "missing role"
        ));
    }
}
