use crate::domain::content::ContentStatus;
use crate::domain::portfolio::PortfolioItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItemDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
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
    #[schema(value_type = String, example = "PUBLISHED")]
    pub status: ContentStatus,
    pub order: i32,
    pub author_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<PortfolioItem> for PortfolioItemDto {
    fn from(item: PortfolioItem) -> Self {
        Self {
            id: item.id.into(),
            title: item.title.into(),
            slug: item.slug.into(),
            description: item.description,
            full_description: item.full_description,
            image: item.image,
            category: item.category.into(),
            tags: item.tags,
            client: item.client,
            duration: item.duration,
            date: item.date,
            link: item.link,
            challenges: item.case_study.challenges,
            solutions: item.case_study.solutions,
            results: item.case_study.results,
            gallery: item.case_study.gallery,
            status: item.status,
            order: item.order,
            author_id: item.author_id.into(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
