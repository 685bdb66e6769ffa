use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self.authenticate_user(&email, &command.password).await?;

        let subject = TokenSubject {
            user_id: user.id,
            email: user.email.to_string(),
            name: user.name.clone(),
            role: user.role,
        };
        let token = self.token_manager.issue(subject).await?;
        tracing::info!(user_id = %user.id, "user logged in");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn authenticate_user(&self, email: &Email, password: &str) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
