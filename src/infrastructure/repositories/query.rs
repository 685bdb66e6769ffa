use crate::domain::content::ContentFilter;
use crate::domain::pagination::PageRequest;
use sqlx::{Postgres, QueryBuilder};

/// `%term%` with LIKE metacharacters escaped.
pub(super) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Appends the `WHERE` clause for a content listing. `search_columns` are
/// matched case-insensitively.
pub(super) fn push_content_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    filter: &ContentFilter,
    search_columns: &[&str],
) {
    let mut has_where = false;
    let mut next_clause = |builder: &mut QueryBuilder<'_, Postgres>| {
        builder.push(if has_where { " AND " } else { " WHERE " });
        has_where = true;
    };

    if let Some(status) = filter.status {
        next_clause(builder);
        builder.push("status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(category) = &filter.category {
        next_clause(builder);
        builder.push("LOWER(category) = LOWER(");
        builder.push_bind(category.clone());
        builder.push(")");
    }
    if let Some(search) = &filter.search {
        next_clause(builder);
        push_search(builder, search, search_columns);
    }
}

pub(super) fn push_search(builder: &mut QueryBuilder<'_, Postgres>, term: &str, columns: &[&str]) {
    let pattern = like_pattern(term);
    builder.push("(");
    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            builder.push(" OR ");
        }
        builder.push(*column);
        builder.push(" ILIKE ");
        builder.push_bind(pattern.clone());
    }
    builder.push(")");
}

pub(super) fn push_page(builder: &mut QueryBuilder<'_, Postgres>, page: &PageRequest) {
    builder.push(" LIMIT ");
    builder.push_bind(i64::from(page.limit()));
    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));
}

pub(super) fn to_total(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}
