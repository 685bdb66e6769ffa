use super::ContactCommandService;
use crate::{
    application::{
        dto::ContactDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        contact::NewContactMessage,
        content::value_objects::{optional_text, required_text},
        user::Email,
    },
};

const MAX_NAME_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 40;
const MAX_SUBJECT_LEN: usize = 200;
const MAX_MESSAGE_LEN: usize = 5_000;

#[derive(Debug, Clone, Default)]
pub struct SubmitContactCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactCommandService {
    /// Public entry point; no principal is required.
    pub async fn submit(&self, command: SubmitContactCommand) -> ApplicationResult<ContactDto> {
        let mut errors = FieldErrors::new();
        let first_name =
            errors.capture(required_text("firstName", command.first_name, MAX_NAME_LEN));
        let last_name = errors.capture(required_text("lastName", command.last_name, MAX_NAME_LEN));
        let email = errors.capture(Email::new(command.email));
        let subject = errors.capture(required_text("subject", command.subject, MAX_SUBJECT_LEN));
        let message = errors.capture(required_text("message", command.message, MAX_MESSAGE_LEN));
        let phone = match optional_text(command.phone) {
            Some(raw) => errors.capture(required_text("phone", raw, MAX_PHONE_LEN).map(Some)),
            None => Some(None),
        };

        let (Some(first_name), Some(last_name), Some(email), Some(subject), Some(message), Some(phone)) =
            (first_name, last_name, email, subject, message, phone)
        else {
            return Err(ApplicationError::Validation(errors));
        };

        let created = self
            .repo
            .insert(NewContactMessage {
                first_name,
                last_name,
                email,
                phone,
                subject,
                message,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(contact_id = %created.id, "contact message received");
        Ok(created.into())
    }
}
