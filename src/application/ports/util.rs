// src/application/ports/util.rs
/// Derives a URL-safe slug from free text: lower-cased, runs of
/// non-alphanumeric characters collapsed to one hyphen, edges trimmed.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
