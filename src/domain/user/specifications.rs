use crate::domain::user::value_objects::Role;

/// A rule over the caller's role.
pub trait RoleSpecification {
    fn is_satisfied_by(&self, role: Role) -> bool;
}

/// Creating, editing and changing the status of posts, portfolio items and
/// contact messages.
pub struct CanEditContent;

impl RoleSpecification for CanEditContent {
    fn is_satisfied_by(&self, role: Role) -> bool {
        match role {
            Role::Editor | Role::Admin => true,
            Role::User => false,
        }
    }
}

/// Seeing drafts, archived items and the contact inbox.
pub struct CanViewUnpublished;

impl RoleSpecification for CanViewUnpublished {
    fn is_satisfied_by(&self, role: Role) -> bool {
        match role {
            Role::Editor | Role::Admin => true,
            Role::User => false,
        }
    }
}

/// Permanent deletion of any entity.
pub struct CanDeleteContent;

impl RoleSpecification for CanDeleteContent {
    fn is_satisfied_by(&self, role: Role) -> bool {
        match role {
            Role::Admin => true,
            Role::Editor | Role::User => false,
        }
    }
}

pub struct CanManageUsers;

impl RoleSpecification for CanManageUsers {
    fn is_satisfied_by(&self, role: Role) -> bool {
        match role {
            Role::Admin => true,
            Role::Editor | Role::User => false,
        }
    }
}
