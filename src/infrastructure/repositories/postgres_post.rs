use super::{
    error::{map_slug_write, map_sqlx},
    json_columns::{decode_list, encode_list},
    query::{push_content_filter, push_page, to_total},
};
use crate::domain::content::{Category, ContentFilter, ContentStatus, Slug, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::Page;
use crate::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWriteRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, slug, excerpt, content, image, category, tags, status, \
     read_time, author_id, created_at, updated_at, published_at";
const SEARCH_COLUMNS: [&str; 2] = ["title", "excerpt"];

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    image: Option<String>,
    category: String,
    tags: String,
    status: String,
    read_time: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            excerpt: row.excerpt,
            content: row.content,
            image: row.image,
            category: Category::new(row.category)?,
            tags: decode_list("tags", &row.tags)?,
            status: row.status.parse::<ContentStatus>()?,
            read_time: row.read_time,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            published_at: row.published_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let tags = encode_list(&post.tags)?;
        let sql = format!(
            "INSERT INTO posts (title, slug, excerpt, content, image, category, tags, status, \
             read_time, author_id, created_at, updated_at, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {POST_COLUMNS}"
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(post.title.as_str())
            .bind(post.slug.as_str())
            .bind(&post.excerpt)
            .bind(&post.content)
            .bind(post.image.as_deref())
            .bind(post.category.as_str())
            .bind(tags)
            .bind(post.status.as_str())
            .bind(&post.read_time)
            .bind(i64::from(post.author_id))
            .bind(post.created_at)
            .bind(post.updated_at)
            .bind(post.published_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_slug_write(post.slug.as_str()))?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            excerpt,
            content,
            image,
            category,
            tags,
            read_time,
            publish_state,
            updated_at,
        } = update;
        let claimed_slug = slug.as_ref().map(|s| s.to_string()).unwrap_or_default();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE posts SET ");
        let mut fields = builder.separated(", ");
        fields.push("updated_at = ").push_bind_unseparated(updated_at);
        if let Some(title) = title {
            fields.push("title = ").push_bind_unseparated(String::from(title));
        }
        if let Some(slug) = slug {
            fields.push("slug = ").push_bind_unseparated(String::from(slug));
        }
        if let Some(excerpt) = excerpt {
            fields.push("excerpt = ").push_bind_unseparated(excerpt);
        }
        if let Some(content) = content {
            fields.push("content = ").push_bind_unseparated(content);
        }
        if let Some(image) = image {
            fields.push("image = ").push_bind_unseparated(image);
        }
        if let Some(category) = category {
            fields.push("category = ").push_bind_unseparated(String::from(category));
        }
        if let Some(tags) = tags {
            fields.push("tags = ").push_bind_unseparated(encode_list(&tags)?);
        }
        if let Some(read_time) = read_time {
            fields.push("read_time = ").push_bind_unseparated(read_time);
        }
        if let Some(state) = publish_state {
            fields
                .push("status = ")
                .push_bind_unseparated(state.status.as_str());
            fields
                .push("published_at = ")
                .push_bind_unseparated(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_slug_write(&claimed_slug))?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<Post>> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM posts");
        push_content_filter(&mut count, filter, &SEARCH_COLUMNS);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        select.push(POST_COLUMNS);
        select.push(" FROM posts");
        push_content_filter(&mut select, filter, &SEARCH_COLUMNS);
        select.push(" ORDER BY created_at DESC, id DESC");
        push_page(&mut select, &filter.page);

        let rows = select
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(posts, to_total(total), filter.page))
    }
}
