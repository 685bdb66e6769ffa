pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ContactMessage, NewContactMessage};
pub use repository::{ContactFilter, ContactRepository};
pub use value_objects::{ContactId, ContactStatus};
