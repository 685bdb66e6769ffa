// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::parse_claims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

const AUTHORITY_CODE: &str = r#"
    user({uid}, {email});
    role({urole});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
"#;

/// Ed25519-signed Biscuit bearer tokens.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::store(format!("invalid biscuit root key: {err}")))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }

    fn mint(
        &self,
        subject: &TokenSubject,
        issued_at: SystemTime,
        expires_at: SystemTime,
    ) -> ApplicationResult<String> {
        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("uid".into(), i64::from(subject.user_id).into());
        params.insert("email".into(), subject.email.clone().into());
        params.insert("urole".into(), subject.role.as_str().into());
        params.insert("issued".into(), issued_at.into());
        params.insert("exp".into(), expires_at.into());

        let mut code = String::from(AUTHORITY_CODE);
        if let Some(name) = &subject.name {
            code.push_str("name({uname});\n");
            params.insert("uname".into(), name.clone().into());
        }

        let token = Biscuit::builder()
            .code_with_params(&code, params, HashMap::new())
            .map_err(|err| ApplicationError::store(err.to_string()))?
            .build(self.root.as_ref())
            .map_err(|err| ApplicationError::store(err.to_string()))?;

        token
            .to_base64()
            .map_err(|err| ApplicationError::store(err.to_string()))
    }
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::store("token expiration overflow"))?;
        let token = self.mint(&subject, issued_at, expires_at)?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(format!("invalid token: {err}")))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if user($id, $email);")
            .map_err(|err| ApplicationError::store(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|_| ApplicationError::unauthorized("token rejected"))?;

        let (facts, _, _, _) = authorizer.dump();
        parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserId};

    fn manager(ttl: Duration) -> BiscuitTokenManager {
        let key = KeyPair::new();
        BiscuitTokenManager::new(&key.private().to_bytes_hex(), ttl).unwrap()
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId(42),
            email: "editor@example.com".into(),
            name: Some("Eddie".into()),
            role: Role::Editor,
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates() {
        let manager = manager(Duration::from_secs(3600));
        let issued = manager.issue(subject()).await.unwrap();
        assert_eq!(issued.expires_in, 3600);

        let user = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.id, UserId(42));
        assert_eq!(user.email, "editor@example.com");
        assert_eq!(user.name.as_deref(), Some("Eddie"));
        assert_eq!(user.role, Role::Editor);
    }

    #[tokio::test]
    async fn token_from_another_key_is_rejected() {
        let issuer = manager(Duration::from_secs(60));
        let verifier = manager(Duration::from_secs(60));
        let issued = issuer.issue(subject()).await.unwrap();
        assert!(matches!(
            verifier.authenticate(&issued.token).await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        let manager = manager(Duration::from_secs(60));
        assert!(matches!(
            manager.authenticate("not-a-token").await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }
}
