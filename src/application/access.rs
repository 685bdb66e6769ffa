use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::RoleSpecification;

/// Resolves the caller against a role rule. An anonymous caller and an
/// insufficient role both fail as `Unauthorized`.
pub fn authorize<'a>(
    actor: Option<&'a AuthenticatedUser>,
    spec: &impl RoleSpecification,
    action: &str,
) -> ApplicationResult<&'a AuthenticatedUser> {
    let actor = actor.ok_or_else(|| ApplicationError::unauthorized("authentication required"))?;
    if spec.is_satisfied_by(actor.role) {
        Ok(actor)
    } else {
        tracing::debug!(user_id = %actor.id, role = %actor.role, action, "role check failed");
        Err(ApplicationError::unauthorized(format!(
            "role {} may not {action}",
            actor.role
        )))
    }
}

pub fn can(actor: Option<&AuthenticatedUser>, spec: &impl RoleSpecification) -> bool {
    actor.is_some_and(|actor| spec.is_satisfied_by(actor.role))
}
