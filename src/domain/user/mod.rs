// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewUser, User, UserUpdate};
pub use repository::UserRepository;
pub use specifications::{
    CanDeleteContent, CanEditContent, CanManageUsers, CanViewUnpublished, RoleSpecification,
};
pub use value_objects::{Email, PasswordHash, Role, UserId};
