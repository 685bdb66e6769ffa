mod create;
mod delete;
mod service;
mod update;

pub use create::CreatePortfolioItemCommand;
pub use delete::DeletePortfolioItemCommand;
pub use service::PortfolioCommandService;
pub use update::UpdatePortfolioItemCommand;
