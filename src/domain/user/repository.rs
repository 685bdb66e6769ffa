use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::entity::{NewUser, User, UserUpdate};
use crate::domain::user::value_objects::{Email, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn list(&self, page: PageRequest) -> DomainResult<Page<User>>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
