pub mod auth;
pub mod contacts;
pub mod pagination;
pub mod portfolio;
pub mod posts;
pub mod serde_time;
pub mod stats;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use contacts::ContactDto;
pub use pagination::{Paginated, PaginationMeta};
pub use portfolio::PortfolioItemDto;
pub use posts::PostDto;
pub use stats::{ContactCounts, ContentCounts, DashboardStatsDto};
pub use users::UserDto;
