// tests/support/mocks/posts.rs
use agency_cms::domain::content::{ContentFilter, Slug};
use agency_cms::domain::errors::{DomainError, DomainResult};
use agency_cms::domain::pagination::Page;
use agency_cms::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWriteRepository,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mirrors the `posts` table, including its unique slug constraint.
#[derive(Default)]
pub struct InMemoryPostRepo {
    rows: Mutex<Vec<Post>>,
}

impl InMemoryPostRepo {
    pub fn snapshot(&self) -> Vec<Post> {
        self.rows.lock().unwrap().clone()
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        self.rows.lock().unwrap().iter().find(|p| p.id.0 == id).cloned()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::SlugTaken(post.slug.as_str().to_string()));
        }
        let id = rows.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let stored = Post {
            id: PostId(id),
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            image: post.image,
            category: post.category,
            tags: post.tags,
            status: post.status,
            read_time: post.read_time,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
            published_at: post.published_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slug) = &update.slug {
            if rows.iter().any(|p| &p.slug == slug && p.id != update.id) {
                return Err(DomainError::SlugTaken(slug.as_str().to_string()));
            }
        }
        let post = rows
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        update.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| &p.slug == slug).cloned())
    }

    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<Post>> {
        let mut posts: Vec<Post> = self
            .snapshot()
            .into_iter()
            .filter(|p| filter.status.is_none_or(|status| p.status == status))
            .filter(|p| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|c| p.category.as_str().eq_ignore_ascii_case(c))
            })
            .filter(|p| {
                filter
                    .search
                    .as_deref()
                    .is_none_or(|term| super::matches_term(&[p.title.as_str(), &p.excerpt], term))
            })
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(super::paginate(posts, filter.page))
    }
}

/// Read side that never sees an existing slug, so two writers can both pass
/// the availability check and meet at the store's constraint.
pub struct BlindPostSlugLookup(pub Arc<InMemoryPostRepo>);

#[async_trait]
impl PostReadRepository for BlindPostSlugLookup {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Post>> {
        Ok(None)
    }

    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<Post>> {
        self.0.list(filter).await
    }
}
