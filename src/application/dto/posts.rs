use crate::domain::content::ContentStatus;
use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    #[schema(value_type = String, example = "PUBLISHED")]
    pub status: ContentStatus,
    pub read_time: String,
    pub author_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            excerpt: post.excerpt,
            content: post.content,
            image: post.image,
            category: post.category.into(),
            tags: post.tags,
            status: post.status,
            read_time: post.read_time,
            author_id: post.author_id.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            published_at: post.published_at,
        }
    }
}
