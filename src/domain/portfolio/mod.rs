pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPortfolioItem, PortfolioItem, PortfolioUpdate};
pub use repository::{PortfolioReadRepository, PortfolioWriteRepository};
pub use value_objects::{CaseStudy, PortfolioId};
