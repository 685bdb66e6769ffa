pub mod auth;
pub mod blog;
pub mod contacts;
pub mod dashboard;
pub mod portfolio;
pub mod posts;
pub mod users;
