use crate::domain::content::{Category, ContentStatus, Slug, Title};
use crate::domain::post::value_objects::PostId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: Title,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub status: ContentStatus,
    pub read_time: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Moves the post to `next`. The first entry into PUBLISHED stamps
    /// `published_at`; once stamped it never changes or clears.
    pub fn transition_to(&mut self, next: ContentStatus, now: DateTime<Utc>) {
        self.published_at = stamp_publication(Some(self.status), next, self.published_at, now);
        self.status = next;
        self.updated_at = now;
    }
}

pub(crate) fn stamp_publication(
    current: Option<ContentStatus>,
    next: ContentStatus,
    published_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let entering_published = next.is_published() && !current.is_some_and(|s| s.is_published());
    match published_at {
        Some(stamped) => Some(stamped),
        None if entering_published => Some(now),
        None => None,
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: Title,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub status: ContentStatus,
    pub read_time: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub status: ContentStatus,
    pub published_at: Option<DateTime<Utc>>,
}

/// Field-level patch; `None` leaves the stored value untouched.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<Option<String>>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
    pub read_time: Option<String>,
    pub publish_state: Option<PublishStateUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            excerpt: None,
            content: None,
            image: None,
            category: None,
            tags: None,
            read_time: None,
            publish_state: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_excerpt(mut self, excerpt: String) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_read_time(mut self, read_time: String) -> Self {
        self.read_time = Some(read_time);
        self
    }

    pub fn with_publish_state(
        mut self,
        status: ContentStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            status,
            published_at,
        });
        self
    }

    /// Applies the patch to an in-memory copy, mirroring what the store does.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            post.slug = slug.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            post.excerpt = excerpt.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(image) = &self.image {
            post.image = image.clone();
        }
        if let Some(category) = &self.category {
            post.category = category.clone();
        }
        if let Some(tags) = &self.tags {
            post.tags = tags.clone();
        }
        if let Some(read_time) = &self.read_time {
            post.read_time = read_time.clone();
        }
        if let Some(state) = &self.publish_state {
            post.status = state.status;
            post.published_at = state.published_at;
        }
        post.updated_at = self.updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_post(status: ContentStatus) -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(1).unwrap(),
            title: Title::new("Hello").unwrap(),
            slug: Slug::new("hello").unwrap(),
            excerpt: "excerpt".into(),
            content: "<p>body</p>".into(),
            image: None,
            category: Category::new("News").unwrap(),
            tags: vec![],
            status,
            read_time: "1 min read".into(),
            author_id: UserId::new(1).unwrap(),
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    #[test]
    fn publishing_a_draft_stamps_published_at() {
        let mut post = sample_post(ContentStatus::Draft);
        let now = Utc::now();
        post.transition_to(ContentStatus::Published, now);
        assert_eq!(post.status, ContentStatus::Published);
        assert_eq!(post.published_at, Some(now));
        assert_eq!(post.updated_at, now);
    }

    #[test]
    fn published_at_survives_archiving_and_republishing() {
        let mut post = sample_post(ContentStatus::Draft);
        let first = Utc::now();
        post.transition_to(ContentStatus::Published, first);
        post.transition_to(ContentStatus::Archived, first + Duration::seconds(5));
        assert_eq!(post.published_at, Some(first));
        post.transition_to(ContentStatus::Published, first + Duration::seconds(10));
        assert_eq!(post.published_at, Some(first));
        post.transition_to(ContentStatus::Draft, first + Duration::seconds(15));
        assert_eq!(post.published_at, Some(first));
    }

    #[test]
    fn staying_published_does_not_stamp() {
        let mut post = sample_post(ContentStatus::Published);
        post.transition_to(ContentStatus::Published, Utc::now());
        assert_eq!(post.published_at, None);
    }

    #[test]
    fn new_published_post_is_stamped() {
        let now = Utc::now();
        assert_eq!(stamp_publication(None, ContentStatus::Published, None, now), Some(now));
        assert_eq!(stamp_publication(None, ContentStatus::Draft, None, now), None);
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut post = sample_post(ContentStatus::Draft);
        let later = post.updated_at + Duration::seconds(30);
        PostUpdate::new(post.id, later)
            .with_excerpt("new excerpt".into())
            .with_image(Some("https://cdn.example.com/a.png".into()))
            .apply_to(&mut post);
        assert_eq!(post.excerpt, "new excerpt");
        assert_eq!(post.title.as_str(), "Hello");
        assert_eq!(post.image.as_deref(), Some("https://cdn.example.com/a.png"));
        assert_eq!(post.updated_at, later);
    }
}
