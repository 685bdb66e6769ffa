pub mod contacts;
pub mod dashboard;
pub mod portfolio;
pub mod posts;
pub mod users;
