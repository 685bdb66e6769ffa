mod delete;
mod service;
mod submit;
mod update_status;

pub use delete::DeleteContactCommand;
pub use service::ContactCommandService;
pub use submit::SubmitContactCommand;
pub use update_status::UpdateContactStatusCommand;
