// tests/support/mocks/users.rs
use agency_cms::domain::errors::{DomainError, DomainResult};
use agency_cms::domain::pagination::{Page, PageRequest};
use agency_cms::domain::user::{
    Email, NewUser, PasswordHash, Role, User, UserId, UserRepository, UserUpdate,
};
use async_trait::async_trait;
use std::sync::Mutex;

use super::security::{ADMIN_ID, EDITOR_ID, USER_ID};

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    /// Pre-populated with the accounts behind the fixed test tokens.
    pub fn seeded() -> Self {
        let repo = Self::default();
        let now = super::time::fixed_now();
        let accounts = [
            (ADMIN_ID, "admin@example.com", Role::Admin),
            (EDITOR_ID, "editor@example.com", Role::Editor),
            (USER_ID, "user@example.com", Role::User),
        ];
        {
            let mut users = repo.users.lock().unwrap();
            for (id, email, role) in accounts {
                users.push(User {
                    id: UserId(id),
                    email: Email::new(email).unwrap(),
                    name: None,
                    password_hash: PasswordHash::new("hash::password123").unwrap(),
                    role,
                    created_at: now,
                });
            }
        }
        repo
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email is already registered".into()));
        }
        let id = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        let user = User {
            id: UserId(id),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self, page: PageRequest) -> DomainResult<Page<User>> {
        let mut users = self.snapshot();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(super::paginate(users, page))
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }
}
