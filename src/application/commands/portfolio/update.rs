use super::{
    PortfolioCommandService,
    create::{MAX_DATE_LEN, MAX_DESCRIPTION_LEN, MAX_FULL_DESCRIPTION_LEN},
};
use crate::{
    application::{
        access::authorize,
        commands::content::{patch_link, patch_text, patch_url},
        dto::{AuthenticatedUser, PortfolioItemDto},
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        content::{
            Category, ContentStatus, Slug, Title,
            value_objects::{optional_text, required_text},
        },
        portfolio::{PortfolioId, PortfolioUpdate},
        user::CanEditContent,
    },
};

/// Only the fields that are `Some` change. Blank `image`, `link`, `client`
/// or `duration` clear the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePortfolioItemCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub client: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
    pub challenges: Option<Vec<String>>,
    pub solutions: Option<Vec<String>>,
    pub results: Option<Vec<String>>,
    pub gallery: Option<Vec<String>>,
    pub status: Option<String>,
    pub order: Option<i32>,
}

impl PortfolioCommandService {
    pub async fn update_item(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdatePortfolioItemCommand,
    ) -> ApplicationResult<PortfolioItemDto> {
        let actor = authorize(actor, &CanEditContent, "update portfolio items")?;
        let id = PortfolioId::new(command.id)
            .map_err(|_| ApplicationError::not_found("portfolio item not found"))?;

        let current = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("portfolio item not found"))?;

        let mut errors = FieldErrors::new();
        let title = command.title.map(Title::new).and_then(|r| errors.capture(r));
        let slug = command.slug.map(Slug::new).and_then(|r| errors.capture(r));
        let description = command
            .description
            .map(|v| required_text("description", v, MAX_DESCRIPTION_LEN))
            .and_then(|r| errors.capture(r));
        let full_description = command
            .full_description
            .map(|v| required_text("fullDescription", v, MAX_FULL_DESCRIPTION_LEN))
            .and_then(|r| errors.capture(r));
        let category = command.category.map(Category::new).and_then(|r| errors.capture(r));
        let date = command
            .date
            .map(|v| required_text("date", v, MAX_DATE_LEN))
            .and_then(|r| errors.capture(r));
        let image = patch_url("image", command.image).and_then(|r| errors.capture(r));
        let link = patch_link(command.link).and_then(|r| errors.capture(r));
        let status = optional_text(command.status)
            .map(|raw| raw.parse::<ContentStatus>())
            .and_then(|r| errors.capture(r));
        errors.into_result()?;

        let slug = slug.filter(|slug| *slug != current.slug);
        if let Some(slug) = &slug {
            self.ensure_slug_free(slug, Some(id)).await?;
        }

        let update = PortfolioUpdate {
            title,
            slug,
            description,
            full_description,
            image,
            category,
            tags: command.tags,
            client: patch_text(command.client),
            duration: patch_text(command.duration),
            date,
            link,
            challenges: command.challenges,
            solutions: command.solutions,
            results: command.results,
            gallery: command.gallery,
            status,
            order: command.order,
            ..PortfolioUpdate::new(id, self.clock.now())
        };

        let updated = self.write_repo.update(update).await?;
        tracing::info!(portfolio_id = %id, actor_id = %actor.id, "portfolio item updated");
        Ok(updated.into())
    }
}
