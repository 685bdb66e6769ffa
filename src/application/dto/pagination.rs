use crate::domain::pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T, U: Into<T>> From<Page<U>> for Paginated<T> {
    fn from(page: Page<U>) -> Self {
        let pagination = PaginationMeta {
            page: page.request.page(),
            limit: page.request.limit(),
            total: page.total,
            pages: page.pages(),
        };
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            pagination,
        }
    }
}
