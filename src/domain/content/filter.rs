use crate::domain::content::value_objects::ContentStatus;
use crate::domain::pagination::PageRequest;

/// Listing criteria shared by posts and portfolio items. `status: None` means
/// every status.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub status: Option<ContentStatus>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: PageRequest,
}

impl ContentFilter {
    pub fn with_status(mut self, status: Option<ContentStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = normalize_term(category);
        self
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = normalize_term(search);
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

fn normalize_term(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
