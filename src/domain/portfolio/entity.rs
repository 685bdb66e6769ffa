use crate::domain::content::{Category, ContentStatus, Slug, Title};
use crate::domain::portfolio::value_objects::{CaseStudy, PortfolioId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct PortfolioItem {
    pub id: PortfolioId,
    pub title: Title,
    pub slug: Slug,
    pub description: String,
    pub full_description: String,
    pub image: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub client: Option<String>,
    pub duration: Option<String>,
    pub date: String,
    pub link: Option<String>,
    pub case_study: CaseStudy,
    pub status: ContentStatus,
    pub order: i32,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPortfolioItem {
    pub title: Title,
    pub slug: Slug,
    pub description: String,
    pub full_description: String,
    pub image: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub client: Option<String>,
    pub duration: Option<String>,
    pub date: String,
    pub link: Option<String>,
    pub case_study: CaseStudy,
    pub status: ContentStatus,
    pub order: i32,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field-level patch. Optional columns use `Some(None)` to clear.
#[derive(Debug, Clone)]
pub struct PortfolioUpdate {
    pub id: PortfolioId,
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image: Option<Option<String>>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
    pub client: Option<Option<String>>,
    pub duration: Option<Option<String>>,
    pub date: Option<String>,
    pub link: Option<Option<String>>,
    pub challenges: Option<Vec<String>>,
    pub solutions: Option<Vec<String>>,
    pub results: Option<Vec<String>>,
    pub gallery: Option<Vec<String>>,
    pub status: Option<ContentStatus>,
    pub order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioUpdate {
    pub fn new(id: PortfolioId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            full_description: None,
            image: None,
            category: None,
            tags: None,
            client: None,
            duration: None,
            date: None,
            link: None,
            challenges: None,
            solutions: None,
            results: None,
            gallery: None,
            status: None,
            order: None,
            updated_at,
        }
    }

    pub fn apply_to(&self, item: &mut PortfolioItem) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        set(&mut item.title, &self.title);
        set(&mut item.slug, &self.slug);
        set(&mut item.description, &self.description);
        set(&mut item.full_description, &self.full_description);
        set(&mut item.image, &self.image);
        set(&mut item.category, &self.category);
        set(&mut item.tags, &self.tags);
        set(&mut item.client, &self.client);
        set(&mut item.duration, &self.duration);
        set(&mut item.date, &self.date);
        set(&mut item.link, &self.link);
        set(&mut item.case_study.challenges, &self.challenges);
        set(&mut item.case_study.solutions, &self.solutions);
        set(&mut item.case_study.results, &self.results);
        set(&mut item.case_study.gallery, &self.gallery);
        set(&mut item.status, &self.status);
        set(&mut item.order, &self.order);
        item.updated_at = self.updated_at;
    }
}
