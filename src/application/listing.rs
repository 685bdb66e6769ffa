use crate::application::{access, dto::AuthenticatedUser, error::ApplicationResult};
use crate::domain::content::{ContentFilter, ContentStatus};
use crate::domain::pagination::PageRequest;
use crate::domain::user::CanViewUnpublished;

/// Raw listing parameters as received from a caller.
#[derive(Debug, Clone, Default)]
pub struct ListContentQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Turns caller parameters into a store filter. Callers that cannot see
/// unpublished content get PUBLISHED by default and are rejected when they
/// ask for anything else; editors see every status unless they filter.
pub fn resolve_content_filter(
    actor: Option<&AuthenticatedUser>,
    query: ListContentQuery,
) -> ApplicationResult<ContentFilter> {
    let requested = query
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
        .map(str::parse::<ContentStatus>)
        .transpose()?;

    let status = if access::can(actor, &CanViewUnpublished) {
        requested
    } else {
        match requested {
            None | Some(ContentStatus::Published) => Some(ContentStatus::Published),
            Some(ContentStatus::Draft | ContentStatus::Archived) => {
                access::authorize(actor, &CanViewUnpublished, "list unpublished content")?;
                requested
            }
        }
    };

    Ok(ContentFilter::default()
        .with_status(status)
        .with_category(query.category)
        .with_search(query.search)
        .with_page(PageRequest::new(query.page, query.limit)))
}
