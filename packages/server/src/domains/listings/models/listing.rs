use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Postgres, QueryBuilder};

use super::category::is_all_categories;
use crate::common::ListingId;
use crate::domains::listings::error::ListingResult;

/// Listing model - a lodging record imported from the tourism data API
///
/// Rows are written only by the import job and are read-only to the API.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub address: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub homepage: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,

    /// Upstream content identifier, unique across the table
    #[sqlx(rename = "content_id")]
    pub external_id: String,

    pub created_at: DateTime<Utc>,
}

/// Input for importing a listing
#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub name: String,
    pub address: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub homepage: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub external_id: String,
}

/// Filter predicate shared by `count_matching` and `find_page`.
///
/// Construct through [`ListingFilter::new`], which drops blank search text
/// and the "all categories" sentinel so both behave like an omitted filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    search: Option<String>,
    category: Option<String>,
}

impl ListingFilter {
    pub fn new(search: Option<&str>, category: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        let category = category
            .filter(|c| !is_all_categories(c))
            .map(|c| c.trim().to_string());

        Self { search, category }
    }

    /// Case-insensitive substring matched against name or address.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Exact category code.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// ILIKE pattern for the search text, with LIKE wildcards escaped.
    fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|s| format!("%{}%", escape_like(s)))
    }

    fn push_where(&self, query: &mut QueryBuilder<'_, Postgres>) {
        query.push(" WHERE 1=1");

        if let Some(pattern) = self.search_pattern() {
            query
                .push(" AND (name ILIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR address ILIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\')");
        }

        if let Some(category) = &self.category {
            query.push(" AND category = ").push_bind(category.clone());
        }
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Listing {
    /// Count listings matching the filter
    pub async fn count_matching<'e, E>(filter: &ListingFilter, executor: E) -> ListingResult<i64>
    where
        E: PgExecutor<'e>,
    {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM hotels");
        filter.push_where(&mut query);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// Find one page of matching listings, ordered by id ascending
    pub async fn find_page<'e, E>(
        filter: &ListingFilter,
        limit: i64,
        offset: i64,
        executor: E,
    ) -> ListingResult<Vec<Self>>
    where
        E: PgExecutor<'e>,
    {
        let mut query = QueryBuilder::new("SELECT * FROM hotels");
        filter.push_where(&mut query);
        query
            .push(" ORDER BY id ASC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let listings = query.build_query_as::<Self>().fetch_all(executor).await?;
        Ok(listings)
    }

    /// Find listing by ID, returning None if not found
    pub async fn find_by_id<'e, E>(id: ListingId, executor: E) -> ListingResult<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        let listing = sqlx::query_as::<_, Self>("SELECT * FROM hotels WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(listing)
    }

    /// Insert a listing unless its external ID was already imported.
    ///
    /// Returns `None` when the row already exists; the stored row is left untouched.
    pub async fn create_if_absent<'e, E>(input: NewListing, executor: E) -> ListingResult<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        let listing = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO hotels (
                name, address, category, phone, homepage,
                latitude, longitude, description, content_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (content_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.category)
        .bind(&input.phone)
        .bind(&input.homepage)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(&input.description)
        .bind(&input.external_id)
        .fetch_optional(executor)
        .await?;
        Ok(listing)
    }

    /// Count listings per stored category (NULL for uncategorized rows)
    pub async fn count_by_category<'e, E>(executor: E) -> ListingResult<Vec<(Option<String>, i64)>>
    where
        E: PgExecutor<'e>,
    {
        let rows = sqlx::query_as::<_, (Option<String>, i64)>(
            r#"
            SELECT category, COUNT(*) AS count
            FROM hotels
            GROUP BY category
            ORDER BY category
            "#,
        )
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }
}
