use super::PostCommandService;
use crate::{
    application::{
        access::authorize,
        commands::content::derive_slug,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        content::{
            Category, ContentStatus, Title,
            value_objects::{optional_text, optional_url, required_text},
        },
        post::{NewPost, entity::stamp_publication, estimate_read_time},
        user::CanEditContent,
    },
};

pub(super) const MAX_EXCERPT_LEN: usize = 1_000;
pub(super) const MAX_CONTENT_LEN: usize = 200_000;

#[derive(Debug, Clone, Default)]
pub struct CreatePostCommand {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub status: Option<String>,
    pub read_time: Option<String>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let actor = authorize(actor, &CanEditContent, "create posts")?;

        let mut errors = FieldErrors::new();
        let slug = errors.capture(derive_slug(
            self.slugger.as_ref(),
            command.slug,
            &command.title,
        ));
        let title = errors.capture(Title::new(command.title));
        let excerpt = errors.capture(required_text("excerpt", command.excerpt, MAX_EXCERPT_LEN));
        let content = errors.capture(required_text("content", command.content, MAX_CONTENT_LEN));
        let category = errors.capture(Category::new(command.category));
        let image = errors.capture(optional_url("image", command.image));
        let status = match optional_text(command.status) {
            Some(raw) => errors.capture(raw.parse::<ContentStatus>()),
            None => Some(ContentStatus::default()),
        };

        let (
            Some(slug),
            Some(title),
            Some(excerpt),
            Some(content),
            Some(category),
            Some(image),
            Some(status),
        ) = (slug, title, excerpt, content, category, image, status)
        else {
            return Err(ApplicationError::Validation(errors));
        };

        self.ensure_slug_free(&slug, None).await?;

        let now = self.clock.now();
        let read_time =
            optional_text(command.read_time).unwrap_or_else(|| estimate_read_time(&content));
        let new_post = NewPost {
            title,
            slug,
            excerpt,
            content,
            image,
            category,
            tags: command.tags,
            status,
            read_time,
            author_id: actor.id,
            created_at: now,
            updated_at: now,
            published_at: stamp_publication(None, status, None, now),
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(post_id = %created.id, actor_id = %actor.id, status = %created.status, "post created");
        Ok(created.into())
    }
}
