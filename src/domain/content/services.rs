use crate::domain::content::value_objects::Slug;
use crate::domain::errors::{DomainError, DomainResult};

/// A slug is free when nobody owns it, or when its owner is the entity being
/// edited.
pub fn ensure_slug_available<I: PartialEq>(
    slug: &Slug,
    owner: Option<I>,
    editing: Option<I>,
) -> DomainResult<()> {
    match (owner, editing) {
        (None, _) => Ok(()),
        (Some(owner), Some(editing)) if owner == editing => Ok(()),
        (Some(_), _) => Err(DomainError::SlugTaken(slug.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug() -> Slug {
        Slug::new("hello-world").unwrap()
    }

    #[test]
    fn unowned_slug_is_available() {
        assert!(ensure_slug_available::<i64>(&slug(), None, None).is_ok());
    }

    #[test]
    fn own_slug_is_available_when_editing() {
        assert!(ensure_slug_available(&slug(), Some(7), Some(7)).is_ok());
    }

    #[test]
    fn foreign_slug_is_taken() {
        assert!(matches!(
            ensure_slug_available(&slug(), Some(7), None),
            Err(DomainError::SlugTaken(s)) if s == "hello-world"
        ));
        assert!(matches!(
            ensure_slug_available(&slug(), Some(7), Some(8)),
            Err(DomainError::SlugTaken(_))
        ));
    }
}
