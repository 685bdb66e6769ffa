// src/infrastructure/repositories/mod.rs
mod error;
mod json_columns;
mod postgres_contact;
mod postgres_portfolio;
mod postgres_post;
mod postgres_user;
mod query;

pub use error::map_sqlx;
pub use postgres_contact::PostgresContactRepository;
pub use postgres_portfolio::{PostgresPortfolioReadRepository, PostgresPortfolioWriteRepository};
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_user::PostgresUserRepository;
