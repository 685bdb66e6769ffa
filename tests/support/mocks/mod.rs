// tests/support/mocks/mod.rs
pub mod contacts;
pub mod portfolio;
pub mod posts;
pub mod security;
pub mod time;
pub mod users;

pub use contacts::InMemoryContactRepo;
pub use portfolio::{BlindPortfolioSlugLookup, InMemoryPortfolioRepo};
pub use posts::{BlindPostSlugLookup, InMemoryPostRepo};
pub use security::{
    ADMIN_ID, ADMIN_TOKEN, DummyTokenManager, EDITOR_ID, EDITOR_TOKEN, StrictPasswordHasher,
    USER_ID, USER_TOKEN, principal,
};
pub use time::{TestClock, fixed_now};
pub use users::InMemoryUserRepo;

use agency_cms::domain::pagination::{Page, PageRequest};

/// Slices an already ordered result set the way the SQL `LIMIT/OFFSET` does.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let window = items
        .into_iter()
        .skip(offset)
        .take(request.limit() as usize)
        .collect();
    Page::new(window, total, request)
}

pub fn matches_term(haystacks: &[&str], term: &str) -> bool {
    let needle = term.to_lowercase();
    haystacks
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}
