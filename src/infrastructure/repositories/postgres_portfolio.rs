use super::{
    error::{map_slug_write, map_sqlx},
    json_columns::{decode_list, encode_list},
    query::{push_content_filter, push_page, to_total},
};
use crate::domain::content::{Category, ContentFilter, ContentStatus, Slug, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::Page;
use crate::domain::portfolio::{
    CaseStudy, NewPortfolioItem, PortfolioId, PortfolioItem, PortfolioReadRepository,
    PortfolioUpdate, PortfolioWriteRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PORTFOLIO_COLUMNS: &str = "id, title, slug, description, full_description, image, category, \
     tags, client, duration, date, link, challenges, solutions, results, gallery, status, \
     sort_order, author_id, created_at, updated_at";
const SEARCH_COLUMNS: [&str; 2] = ["title", "description"];

#[derive(Debug, FromRow)]
struct PortfolioRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    full_description: String,
    image: Option<String>,
    category: String,
    tags: String,
    client: Option<String>,
    duration: Option<String>,
    date: String,
    link: Option<String>,
    challenges: String,
    solutions: String,
    results: String,
    gallery: String,
    status: String,
    sort_order: i32,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PortfolioRow> for PortfolioItem {
    type Error = DomainError;

    fn try_from(row: PortfolioRow) -> Result<Self, Self::Error> {
        Ok(PortfolioItem {
            id: PortfolioId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            full_description: row.full_description,
            image: row.image,
            category: Category::new(row.category)?,
            tags: decode_list("tags", &row.tags)?,
            client: row.client,
            duration: row.duration,
            date: row.date,
            link: row.link,
            case_study: CaseStudy {
                challenges: decode_list("challenges", &row.challenges)?,
                solutions: decode_list("solutions", &row.solutions)?,
                results: decode_list("results", &row.results)?,
                gallery: decode_list("gallery", &row.gallery)?,
            },
            status: row.status.parse::<ContentStatus>()?,
            order: row.sort_order,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresPortfolioWriteRepository {
    pool: PgPool,
}

impl PostgresPortfolioWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioWriteRepository for PostgresPortfolioWriteRepository {
    async fn insert(&self, item: NewPortfolioItem) -> DomainResult<PortfolioItem> {
        let sql = format!(
            "INSERT INTO portfolio (title, slug, description, full_description, image, category, \
             tags, client, duration, date, link, challenges, solutions, results, gallery, status, \
             sort_order, author_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
             $18, $19, $20) \
             RETURNING {PORTFOLIO_COLUMNS}"
        );

        let row = sqlx::query_as::<_, PortfolioRow>(&sql)
            .bind(item.title.as_str())
            .bind(item.slug.as_str())
            .bind(&item.description)
            .bind(&item.full_description)
            .bind(item.image.as_deref())
            .bind(item.category.as_str())
            .bind(encode_list(&item.tags)?)
            .bind(item.client.as_deref())
            .bind(item.duration.as_deref())
            .bind(&item.date)
            .bind(item.link.as_deref())
            .bind(encode_list(&item.case_study.challenges)?)
            .bind(encode_list(&item.case_study.solutions)?)
            .bind(encode_list(&item.case_study.results)?)
            .bind(encode_list(&item.case_study.gallery)?)
            .bind(item.status.as_str())
            .bind(item.order)
            .bind(i64::from(item.author_id))
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_slug_write(item.slug.as_str()))?;

        PortfolioItem::try_from(row)
    }

    async fn update(&self, update: PortfolioUpdate) -> DomainResult<PortfolioItem> {
        let claimed_slug = update
            .slug
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_default();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE portfolio SET ");
        let mut fields = builder.separated(", ");
        fields
            .push("updated_at = ")
            .push_bind_unseparated(update.updated_at);
        if let Some(title) = update.title {
            fields.push("title = ").push_bind_unseparated(String::from(title));
        }
        if let Some(slug) = update.slug {
            fields.push("slug = ").push_bind_unseparated(String::from(slug));
        }
        if let Some(description) = update.description {
            fields.push("description = ").push_bind_unseparated(description);
        }
        if let Some(full_description) = update.full_description {
            fields
                .push("full_description = ")
                .push_bind_unseparated(full_description);
        }
        if let Some(image) = update.image {
            fields.push("image = ").push_bind_unseparated(image);
        }
        if let Some(category) = update.category {
            fields
                .push("category = ")
                .push_bind_unseparated(String::from(category));
        }
        if let Some(client) = update.client {
            fields.push("client = ").push_bind_unseparated(client);
        }
        if let Some(duration) = update.duration {
            fields.push("duration = ").push_bind_unseparated(duration);
        }
        if let Some(date) = update.date {
            fields.push("date = ").push_bind_unseparated(date);
        }
        if let Some(link) = update.link {
            fields.push("link = ").push_bind_unseparated(link);
        }
        let lists = [
            ("tags = ", update.tags),
            ("challenges = ", update.challenges),
            ("solutions = ", update.solutions),
            ("results = ", update.results),
            ("gallery = ", update.gallery),
        ];
        for (assignment, values) in lists {
            if let Some(values) = values {
                fields
                    .push(assignment)
                    .push_bind_unseparated(encode_list(&values)?);
            }
        }
        if let Some(status) = update.status {
            fields.push("status = ").push_bind_unseparated(status.as_str());
        }
        if let Some(order) = update.order {
            fields.push("sort_order = ").push_bind_unseparated(order);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(PORTFOLIO_COLUMNS);

        let row = builder
            .build_query_as::<PortfolioRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_slug_write(&claimed_slug))?
            .ok_or_else(|| DomainError::NotFound("portfolio item not found".into()))?;

        PortfolioItem::try_from(row)
    }

    async fn delete(&self, id: PortfolioId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM portfolio WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("portfolio item not found".into()));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresPortfolioReadRepository {
    pool: PgPool,
}

impl PostgresPortfolioReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioReadRepository for PostgresPortfolioReadRepository {
    async fn find_by_id(&self, id: PortfolioId) -> DomainResult<Option<PortfolioItem>> {
        let sql = format!("SELECT {PORTFOLIO_COLUMNS} FROM portfolio WHERE id = $1");
        let row = sqlx::query_as::<_, PortfolioRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(PortfolioItem::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PortfolioItem>> {
        let sql = format!("SELECT {PORTFOLIO_COLUMNS} FROM portfolio WHERE slug = $1");
        let row = sqlx::query_as::<_, PortfolioRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(PortfolioItem::try_from).transpose()
    }

    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<PortfolioItem>> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM portfolio");
        push_content_filter(&mut count, filter, &SEARCH_COLUMNS);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        select.push(PORTFOLIO_COLUMNS);
        select.push(" FROM portfolio");
        push_content_filter(&mut select, filter, &SEARCH_COLUMNS);
        select.push(" ORDER BY sort_order ASC, created_at DESC, id DESC");
        push_page(&mut select, &filter.page);

        let rows = select
            .build_query_as::<PortfolioRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let items = rows
            .into_iter()
            .map(PortfolioItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, to_total(total), filter.page))
    }
}
