use crate::application::ports::util::SlugGenerator;
use crate::domain::content::{
    Slug,
    value_objects::{optional_absolute_url, optional_text, optional_url},
};
use crate::domain::errors::DomainResult;

/// An explicit slug wins; otherwise the title is normalised into one.
pub(super) fn derive_slug(
    slugger: &dyn SlugGenerator,
    explicit: Option<String>,
    title: &str,
) -> DomainResult<Slug> {
    match optional_text(explicit) {
        Some(slug) => Slug::new(slug),
        None => Slug::new(slugger.slugify(title)),
    }
}

/// Patch semantics for optional URL columns: absent leaves the value alone,
/// a blank string clears it.
pub(super) fn patch_url(
    field: &'static str,
    value: Option<String>,
) -> Option<DomainResult<Option<String>>> {
    value.map(|raw| optional_url(field, Some(raw)))
}

/// `patch_url` for outbound links, which must be absolute.
pub(super) fn patch_link(value: Option<String>) -> Option<DomainResult<Option<String>>> {
    value.map(|raw| optional_absolute_url("link", Some(raw)))
}

pub(super) fn patch_text(value: Option<String>) -> Option<Option<String>> {
    value.map(|raw| optional_text(Some(raw)))
}
