pub mod filter;
pub mod services;
pub mod value_objects;

pub use filter::ContentFilter;
pub use services::ensure_slug_available;
pub use value_objects::{Category, ContentStatus, Slug, Title};
