mod get_by_id;
mod list;
mod service;

pub use list::ListContactsQuery;
pub use service::ContactQueryService;
