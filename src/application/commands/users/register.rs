use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        access,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        content::value_objects::optional_text,
        user::{CanManageUsers, Email, NewUser, PasswordHash, Role, User},
    },
};

#[derive(Debug, Clone, Default)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl UserCommandService {
    /// The very first account becomes ADMIN. After that anonymous callers get
    /// USER and only an administrator may pick another role.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let mut errors = FieldErrors::new();
        let email = errors.capture(Email::new(command.email));
        errors.capture(validate_password(&command.password));
        let requested_role = optional_text(command.role)
            .map(|raw| raw.parse::<Role>())
            .and_then(|r| errors.capture(r));
        let Some(email) = email else {
            return Err(ApplicationError::Validation(errors));
        };
        errors.into_result()?;

        let existing = self.user_repo.count().await?;
        let role = determine_role(existing, actor, requested_role)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email is already registered"));
        }

        let user = self
            .create_user(email, optional_text(command.name), &command.password, role)
            .await?;
        tracing::info!(user_id = %user.id, role = %user.role, "user registered");
        Ok(user.into())
    }

    async fn create_user(
        &self,
        email: Email,
        name: Option<String>,
        password: &str,
        role: Role,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let new_user = NewUser {
            email,
            name,
            password_hash: PasswordHash::new(hashed)?,
            role,
            created_at: self.clock.now(),
        };
        Ok(self.user_repo.insert(new_user).await?)
    }
}

fn determine_role(
    existing: u64,
    actor: Option<&AuthenticatedUser>,
    requested: Option<Role>,
) -> ApplicationResult<Role> {
    if existing == 0 {
        return Ok(Role::Admin);
    }
    match requested {
        None | Some(Role::User) => Ok(Role::User),
        Some(role) => {
            access::authorize(actor, &CanManageUsers, "assign roles")?;
            Ok(role)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;
    use chrono::Utc;

    fn principal(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId(1),
            email: "admin@example.com".into(),
            name: None,
            role,
            issued_at: Utc::now(),
            expires_at: Utc::now(),
        }
    }

    #[test]
    fn first_account_is_admin() {
        assert_eq!(determine_role(0, None, None).unwrap(), Role::Admin);
        assert_eq!(determine_role(0, None, Some(Role::User)).unwrap(), Role::Admin);
    }

    #[test]
    fn anonymous_registration_yields_user() {
        assert_eq!(determine_role(3, None, None).unwrap(), Role::User);
        assert!(matches!(
            determine_role(3, None, Some(Role::Editor)),
            Err(ApplicationError::Unauthorized(_))
        ));
    }

    #[test]
    fn admin_may_choose_role() {
        let admin = principal(Role::Admin);
        assert_eq!(
            determine_role(3, Some(&admin), Some(Role::Editor)).unwrap(),
            Role::Editor
        );
        let editor = principal(Role::Editor);
        assert!(determine_role(3, Some(&editor), Some(Role::Admin)).is_err());
    }
}
