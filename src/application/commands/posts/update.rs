use super::{
    PostCommandService,
    create::{MAX_CONTENT_LEN, MAX_EXCERPT_LEN},
};
use crate::{
    application::{
        access::authorize,
        commands::content::patch_url,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        content::{
            Category, ContentStatus, Slug, Title,
            value_objects::{optional_text, required_text},
        },
        post::{PostId, PostUpdate},
        user::CanEditContent,
    },
};

/// Only the fields that are `Some` change. An empty `image` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub read_time: Option<String>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let actor = authorize(actor, &CanEditContent, "update posts")?;
        let id = PostId::new(command.id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;

        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let mut errors = FieldErrors::new();
        let title = command.title.map(Title::new).and_then(|r| errors.capture(r));
        let slug = command.slug.map(Slug::new).and_then(|r| errors.capture(r));
        let excerpt = command
            .excerpt
            .map(|v| required_text("excerpt", v, MAX_EXCERPT_LEN))
            .and_then(|r| errors.capture(r));
        let content = command
            .content
            .map(|v| required_text("content", v, MAX_CONTENT_LEN))
            .and_then(|r| errors.capture(r));
        let category = command.category.map(Category::new).and_then(|r| errors.capture(r));
        let image = patch_url("image", command.image).and_then(|r| errors.capture(r));
        let status = optional_text(command.status)
            .map(|raw| raw.parse::<ContentStatus>())
            .and_then(|r| errors.capture(r));
        errors.into_result()?;

        let now = self.clock.now();
        let mut update = PostUpdate::new(id, now);

        if let Some(slug) = slug.filter(|slug| *slug != post.slug) {
            self.ensure_slug_free(&slug, Some(id)).await?;
            update = update.with_slug(slug);
        }
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(excerpt) = excerpt {
            update = update.with_excerpt(excerpt);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }
        if let Some(image) = image {
            update = update.with_image(image);
        }
        if let Some(category) = category {
            update = update.with_category(category);
        }
        if let Some(tags) = command.tags {
            update = update.with_tags(tags);
        }
        if let Some(read_time) = optional_text(command.read_time) {
            update = update.with_read_time(read_time);
        }
        if let Some(status) = status {
            post.transition_to(status, now);
            update = update.with_publish_state(post.status, post.published_at);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(post_id = %id, actor_id = %actor.id, status = %updated.status, "post updated");
        Ok(updated.into())
    }
}
