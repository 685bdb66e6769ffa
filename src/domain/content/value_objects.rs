use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const MAX_SLUG_LEN: usize = 200;
const MAX_TITLE_LEN: usize = 200;

/// Trimmed, non-empty text bounded by `max` characters.
pub fn required_text(field: &'static str, value: impl Into<String>, max: usize) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, format!("{field} is required")));
    }
    if trimmed.chars().count() > max {
        return Err(DomainError::validation(
            field,
            format!("{field} must be at most {max} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Blank input collapses to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn optional_url(field: &'static str, value: Option<String>) -> DomainResult<Option<String>> {
    match optional_text(value) {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/') => {
            Ok(Some(url))
        }
        Some(_) => Err(DomainError::validation(
            field,
            format!("{field} must be an absolute http(s) URL or a site path"),
        )),
        None => Ok(None),
    }
}

/// Like `optional_url`, but site-relative paths are rejected.
pub fn optional_absolute_url(field: &'static str, value: Option<String>) -> DomainResult<Option<String>> {
    match optional_text(value) {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => Ok(Some(url)),
        Some(_) => Err(DomainError::validation(
            field,
            format!("{field} must be an absolute http(s) URL"),
        )),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("title", value, MAX_TITLE_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

/// URL-safe identifier: lowercase ASCII letters, digits and single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::validation("slug", "slug is required"));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::validation(
                "slug",
                format!("slug must be at most {MAX_SLUG_LEN} characters"),
            ));
        }
        let valid_chars = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_chars || value.starts_with('-') || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::validation(
                "slug",
                "slug may only contain lowercase letters, digits and single hyphens",
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("category", value, 100).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

/// Publication state shared by posts and portfolio items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStatus {
    Draft,
    #[default]
    Published,
    Archived,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            "ARCHIVED" => Ok(Self::Archived),
            other => Err(DomainError::validation(
                "status",
                format!("unknown status '{other}'"),
            )),
        }
    }
}
