//! String lists live in `TEXT` columns as JSON arrays. Nothing outside this
//! module sees the encoded form.
use crate::domain::errors::{DomainError, DomainResult};

pub(super) fn encode_list(values: &[String]) -> DomainResult<String> {
    serde_json::to_string(values)
        .map_err(|err| DomainError::Persistence(format!("failed to encode list column: {err}")))
}

/// A blank column is read as an empty list.
pub(super) fn decode_list(column: &str, raw: &str) -> DomainResult<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|err| {
        DomainError::Persistence(format!("column {column} holds malformed JSON: {err}"))
    })
}
