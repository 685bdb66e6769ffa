// tests/support/mocks/security.rs
use agency_cms::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use agency_cms::domain::user::{Role, UserId};
use async_trait::async_trait;
use chrono::Duration;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";
pub const USER_TOKEN: &str = "user-token";

pub const ADMIN_ID: i64 = 1;
pub const EDITOR_ID: i64 = 2;
pub const USER_ID: i64 = 3;

/// The principal a fixed token stands for.
pub fn principal(role: Role) -> AuthenticatedUser {
    let (id, email) = match role {
        Role::Admin => (ADMIN_ID, "admin@example.com"),
        Role::Editor => (EDITOR_ID, "editor@example.com"),
        Role::User => (USER_ID, "user@example.com"),
    };
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId(id),
        email: email.into(),
        name: None,
        role,
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Recognises the three fixed tokens and rejects everything else.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let token = match subject.role {
            Role::Admin => ADMIN_TOKEN,
            Role::Editor => EDITOR_TOKEN,
            Role::User => USER_TOKEN,
        };
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: token.into(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(principal(Role::Admin)),
            EDITOR_TOKEN => Ok(principal(Role::Editor)),
            USER_TOKEN => Ok(principal(Role::User)),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

/// Deterministic, reversible "hash" so tests can exercise wrong passwords.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
