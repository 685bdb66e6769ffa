pub mod entity;
pub mod read_time;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate, PublishStateUpdate};
pub use read_time::estimate_read_time;
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::PostId;
