use super::PortfolioCommandService;
use crate::{
    application::{
        access::authorize,
        commands::content::derive_slug,
        dto::{AuthenticatedUser, PortfolioItemDto},
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        content::{
            Category, ContentStatus, Title,
            value_objects::{optional_absolute_url, optional_text, optional_url, required_text},
        },
        portfolio::{CaseStudy, NewPortfolioItem},
        user::CanEditContent,
    },
};

pub(super) const MAX_DESCRIPTION_LEN: usize = 1_000;
pub(super) const MAX_FULL_DESCRIPTION_LEN: usize = 200_000;
pub(super) const MAX_DATE_LEN: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct CreatePortfolioItemCommand {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub full_description: String,
    pub image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub client: Option<String>,
    pub duration: Option<String>,
    pub date: String,
    pub link: Option<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub results: Vec<String>,
    pub gallery: Vec<String>,
    pub status: Option<String>,
    pub order: Option<i32>,
}

impl PortfolioCommandService {
    pub async fn create_item(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreatePortfolioItemCommand,
    ) -> ApplicationResult<PortfolioItemDto> {
        let actor = authorize(actor, &CanEditContent, "create portfolio items")?;

        let mut errors = FieldErrors::new();
        let slug = errors.capture(derive_slug(
            self.slugger.as_ref(),
            command.slug,
            &command.title,
        ));
        let title = errors.capture(Title::new(command.title));
        let description = errors.capture(required_text(
            "description",
            command.description,
            MAX_DESCRIPTION_LEN,
        ));
        let full_description = errors.capture(required_text(
            "fullDescription",
            command.full_description,
            MAX_FULL_DESCRIPTION_LEN,
        ));
        let category = errors.capture(Category::new(command.category));
        let date = errors.capture(required_text("date", command.date, MAX_DATE_LEN));
        let image = errors.capture(optional_url("image", command.image));
        let link = errors.capture(optional_absolute_url("link", command.link));
        let status = match optional_text(command.status) {
            Some(raw) => errors.capture(raw.parse::<ContentStatus>()),
            None => Some(ContentStatus::default()),
        };

        let (
            Some(slug),
            Some(title),
            Some(description),
            Some(full_description),
            Some(category),
            Some(date),
            Some(image),
            Some(link),
            Some(status),
        ) = (
            slug,
            title,
            description,
            full_description,
            category,
            date,
            image,
            link,
            status,
        )
        else {
            return Err(ApplicationError::Validation(errors));
        };

        self.ensure_slug_free(&slug, None).await?;

        let now = self.clock.now();
        let new_item = NewPortfolioItem {
            title,
            slug,
            description,
            full_description,
            image,
            category,
            tags: command.tags,
            client: optional_text(command.client),
            duration: optional_text(command.duration),
            date,
            link,
            case_study: CaseStudy {
                challenges: command.challenges,
                solutions: command.solutions,
                results: command.results,
                gallery: command.gallery,
            },
            status,
            order: command.order.unwrap_or_default(),
            author_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_item).await?;
        tracing::info!(portfolio_id = %created.id, actor_id = %actor.id, "portfolio item created");
        Ok(created.into())
    }
}
