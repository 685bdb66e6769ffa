// tests/support/mocks/portfolio.rs
use agency_cms::domain::content::{ContentFilter, Slug};
use agency_cms::domain::errors::{DomainError, DomainResult};
use agency_cms::domain::pagination::Page;
use agency_cms::domain::portfolio::{
    NewPortfolioItem, PortfolioId, PortfolioItem, PortfolioReadRepository, PortfolioUpdate,
    PortfolioWriteRepository,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mirrors the `portfolio` table, including its unique slug constraint.
#[derive(Default)]
pub struct InMemoryPortfolioRepo {
    rows: Mutex<Vec<PortfolioItem>>,
}

impl InMemoryPortfolioRepo {
    pub fn snapshot(&self) -> Vec<PortfolioItem> {
        self.rows.lock().unwrap().clone()
    }

    pub fn get(&self, id: i64) -> Option<PortfolioItem> {
        self.rows.lock().unwrap().iter().find(|i| i.id.0 == id).cloned()
    }
}

#[async_trait]
impl PortfolioWriteRepository for InMemoryPortfolioRepo {
    async fn insert(&self, item: NewPortfolioItem) -> DomainResult<PortfolioItem> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|i| i.slug == item.slug) {
            return Err(DomainError::SlugTaken(item.slug.as_str().to_string()));
        }
        let id = rows.iter().map(|i| i.id.0).max().unwrap_or(0) + 1;
        let stored = PortfolioItem {
            id: PortfolioId(id),
            title: item.title,
            slug: item.slug,
            description: item.description,
            full_description: item.full_description,
            image: item.image,
            category: item.category,
            tags: item.tags,
            client: item.client,
            duration: item.duration,
            date: item.date,
            link: item.link,
            case_study: item.case_study,
            status: item.status,
            order: item.order,
            author_id: item.author_id,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PortfolioUpdate) -> DomainResult<PortfolioItem> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &update.slug {
            if rows.iter().any(|i| &i.slug == slug && i.id != update.id) {
                return Err(DomainError::SlugTaken(slug.as_str().to_string()));
            }
        }
        let item = rows
            .iter_mut()
            .find(|i| i.id == update.id)
            .ok_or_else(|| DomainError::NotFound("portfolio item not found".into()))?;
        update.apply_to(item);
        Ok(item.clone())
    }

    async fn delete(&self, id: PortfolioId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|i| i.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("portfolio item not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioReadRepository for InMemoryPortfolioRepo {
    async fn find_by_id(&self, id: PortfolioId) -> DomainResult<Option<PortfolioItem>> {
        Ok(self.rows.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PortfolioItem>> {
        Ok(self.rows.lock().unwrap().iter().find(|i| &i.slug == slug).cloned())
    }

    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<PortfolioItem>> {
        let mut items: Vec<PortfolioItem> = self
            .snapshot()
            .into_iter()
            .filter(|i| filter.status.is_none_or(|status| i.status == status))
            .filter(|i| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|c| i.category.as_str().eq_ignore_ascii_case(c))
            })
            .filter(|i| {
                filter.search.as_deref().is_none_or(|term| {
                    super::matches_term(&[i.title.as_str(), &i.description], term)
                })
            })
            .collect();
        items.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.0.cmp(&a.id.0))
        });
        Ok(super::paginate(items, filter.page))
    }
}

/// Read side that never sees an existing slug.
pub struct BlindPortfolioSlugLookup(pub Arc<InMemoryPortfolioRepo>);

#[async_trait]
impl PortfolioReadRepository for BlindPortfolioSlugLookup {
    async fn find_by_id(&self, id: PortfolioId) -> DomainResult<Option<PortfolioItem>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Option<PortfolioItem>> {
        Ok(None)
    }

    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<PortfolioItem>> {
        self.0.list(filter).await
    }
}
