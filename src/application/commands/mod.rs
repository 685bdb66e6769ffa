pub mod contacts;
pub mod portfolio;
pub mod posts;
pub mod users;

mod content;
