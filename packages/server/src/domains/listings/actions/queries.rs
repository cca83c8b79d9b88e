//! Listing query actions
//!
//! Read-side orchestration: fetch rows from the store, decorate them with
//! enrichment, and assemble the response shapes.

use std::collections::BTreeMap;

use sqlx::PgPool;
use tracing::debug;

use crate::common::{ListingId, ValidatedPaginationArgs};
use crate::domains::listings::data::{HotelData, HotelDetailData, HotelListData, HotelStatsData};
use crate::domains::listings::enrichment::{reference_today, Capacity, Enrichment};
use crate::domains::listings::error::{ListingError, ListingResult};
use crate::domains::listings::models::{category_label, Listing, ListingFilter, UNCATEGORIZED_LABEL};

/// Query service over the listing store.
///
/// Holds the pool it was constructed with; each call checks a connection
/// out for its own duration only.
#[derive(Clone)]
pub struct ListingQueries {
    pool: PgPool,
}

impl ListingQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search listings and return one decorated page.
    ///
    /// The count and the page are read in one read-only snapshot, so `total`
    /// always describes the same data as `items`. An offset past the end
    /// yields an empty page, not an error.
    pub async fn list(
        &self,
        filter: &ListingFilter,
        page: ValidatedPaginationArgs,
    ) -> ListingResult<HotelListData> {
        // Dropping the transaction on any early return rolls it back and
        // hands the connection back to the pool.
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total = Listing::count_matching(filter, &mut *tx).await?;
        let listings = Listing::find_page(filter, page.limit, page.offset, &mut *tx).await?;
        tx.commit().await?;

        let items = decorate(listings);

        debug!(
            search = ?filter.search(),
            category = ?filter.category(),
            limit = page.limit,
            offset = page.offset,
            total,
            count = items.len(),
            "Listed hotels"
        );

        Ok(HotelListData::new(total, items))
    }

    /// Look up one listing with its stable capacity fields.
    pub async fn get(&self, id: ListingId) -> ListingResult<HotelDetailData> {
        let Some(listing) = Listing::find_by_id(id, &self.pool).await? else {
            debug!(listing_id = %id, "Hotel not found");
            return Err(ListingError::NotFound(id));
        };

        debug!(listing_id = %id, "Fetched hotel");

        Ok(HotelDetailData::new(listing, Capacity::for_listing(id)))
    }

    /// Listing totals grouped by category label.
    pub async fn stats(&self) -> ListingResult<HotelStatsData> {
        let rows = Listing::count_by_category(&self.pool).await?;

        let mut categories = BTreeMap::new();
        let mut total_hotels = 0;
        for (category, count) in rows {
            let label = category
                .as_deref()
                .map(category_label)
                .unwrap_or(UNCATEGORIZED_LABEL);
            *categories.entry(label.to_string()).or_insert(0) += count;
            total_hotels += count;
        }

        Ok(HotelStatsData {
            total_hotels,
            categories,
        })
    }
}

/// Merge per-request enrichment into each listing.
///
/// Kept synchronous so the thread-local generator never lives across an await.
fn decorate(listings: Vec<Listing>) -> Vec<HotelData> {
    let today = reference_today();
    let mut rng = rand::thread_rng();

    listings
        .into_iter()
        .map(|listing| {
            let enrichment = Enrichment::generate(listing.id, today, &mut rng);
            HotelData::new(listing, enrichment)
        })
        .collect()
}
