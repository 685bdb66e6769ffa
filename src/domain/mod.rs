pub mod contact;
pub mod content;
pub mod errors;
pub mod pagination;
pub mod portfolio;
pub mod post;
pub mod user;
