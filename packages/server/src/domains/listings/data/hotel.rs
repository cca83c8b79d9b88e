use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::{ListingId, PaginationArgs, ValidatedPaginationArgs};
use crate::domains::listings::enrichment::{Capacity, Enrichment, HotelType};
use crate::domains::listings::error::{ListingError, ListingResult};
use crate::domains::listings::models::{category_label, Listing, ListingFilter};

/// Query-string input for the hotel list endpoint
///
/// Accepts both the offset variant (`q`, `limit`, `offset`) and the page
/// variant (`search`, `category`, `page`, `limit`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelSearchInput {
    pub q: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
    pub offset: Option<i64>,
}

impl HotelSearchInput {
    /// Validate into a store filter and a page window.
    pub fn into_query(self) -> ListingResult<(ListingFilter, ValidatedPaginationArgs)> {
        let page = PaginationArgs {
            limit: self.limit,
            page: self.page,
            offset: self.offset,
        }
        .validate()
        .map_err(ListingError::InvalidArgument)?;

        // A blank `q` does not hide `search`
        let search = self
            .q
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .or(self.search.as_deref());
        let filter = ListingFilter::new(search, self.category.as_deref());

        Ok((filter, page))
    }
}

/// Hotel card in a list response
#[derive(Debug, Clone, Serialize)]
pub struct HotelData {
    pub id: ListingId,
    pub name: String,
    pub address: Option<String>,
    pub category: Option<String>,
    pub category_name: Option<String>,
    pub phone: Option<String>,
    pub homepage: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: String,

    // Synthetic
    pub price: i64,
    pub rating: f64,
    pub reviews: u32,
    pub date_range: String,
    pub stay_nights: u32,
    #[serde(flatten)]
    pub capacity: Capacity,
    pub hotel_type: HotelType,
    pub urgency_message: Option<String>,
    pub badges: Vec<String>,
}

impl HotelData {
    pub fn new(listing: Listing, enrichment: Enrichment) -> Self {
        // Imported overview text wins over generated copy
        let description = listing
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(enrichment.description);

        Self {
            id: listing.id,
            category_name: listing.category.as_deref().map(|c| category_label(c).to_string()),
            name: listing.name,
            address: listing.address,
            category: listing.category,
            phone: listing.phone,
            homepage: listing.homepage,
            latitude: listing.latitude,
            longitude: listing.longitude,
            description,
            price: enrichment.price,
            rating: enrichment.rating,
            reviews: enrichment.review_count,
            date_range: enrichment.stay.display(),
            stay_nights: enrichment.stay.nights(),
            capacity: enrichment.capacity,
            hotel_type: enrichment.hotel_type,
            urgency_message: enrichment.urgency_message,
            badges: enrichment.badges,
        }
    }
}

/// Single hotel in a detail response
///
/// Carries only the stable synthetic fields so a revisit shows the same layout.
#[derive(Debug, Clone, Serialize)]
pub struct HotelDetailData {
    pub id: ListingId,
    pub name: String,
    pub address: Option<String>,
    pub category: Option<String>,
    pub category_name: Option<String>,
    pub phone: Option<String>,
    pub homepage: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub capacity: Capacity,
}

impl HotelDetailData {
    pub fn new(listing: Listing, capacity: Capacity) -> Self {
        Self {
            id: listing.id,
            category_name: listing.category.as_deref().map(|c| category_label(c).to_string()),
            name: listing.name,
            address: listing.address,
            category: listing.category,
            phone: listing.phone,
            homepage: listing.homepage,
            latitude: listing.latitude,
            longitude: listing.longitude,
            description: listing.description,
            capacity,
        }
    }
}

/// Paginated list envelope
#[derive(Debug, Clone, Serialize)]
pub struct HotelListData {
    /// Listings matching the filters, ignoring pagination
    pub total: i64,
    /// Items on this page
    pub count: usize,
    pub items: Vec<HotelData>,
}

impl HotelListData {
    pub fn new(total: i64, items: Vec<HotelData>) -> Self {
        Self {
            total,
            count: items.len(),
            items,
        }
    }
}

/// Aggregate counts for the stats endpoint
#[derive(Debug, Clone, Serialize)]
pub struct HotelStatsData {
    pub total_hotels: i64,
    /// Category display label -> listing count
    pub categories: BTreeMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::listings::enrichment::StayWindow;
    use chrono::{NaiveDate, Utc};

    fn listing(description: Option<&str>) -> Listing {
        Listing {
            id: ListingId::new(3),
            name: "Park Hotel".to_string(),
            address: Some("서울 중구".to_string()),
            category: Some("B02010100".to_string()),
            phone: None,
            homepage: None,
            latitude: Some(37.56),
            longitude: Some(126.97),
            description: description.map(String::from),
            external_id: "142785".to_string(),
            created_at: Utc::now(),
        }
    }

    fn enrichment() -> Enrichment {
        let check_in = NaiveDate::from_ymd_opt(2025, 5, 30).unwrap();
        Enrichment {
            price: 120_000,
            rating: 4.57,
            review_count: 42,
            stay: StayWindow {
                check_in,
                check_out: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            },
            capacity: Capacity::for_listing(ListingId::new(3)),
            hotel_type: HotelType::Hotel,
            description: "generated copy".to_string(),
            urgency_message: None,
            badges: vec!["무료 취소".to_string()],
        }
    }

    #[test]
    fn test_search_input_defaults() {
        let (filter, page) = HotelSearchInput::default().into_query().unwrap();
        assert_eq!(filter, ListingFilter::default());
        assert_eq!(page.limit, 20);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_search_input_prefers_q_over_search() {
        let input = HotelSearchInput {
            q: Some("park".to_string()),
            search: Some("lake".to_string()),
            ..Default::default()
        };
        let (filter, _) = input.into_query().unwrap();
        assert_eq!(filter.search(), Some("park"));
    }

    #[test]
    fn test_search_input_blank_q_falls_back_to_search() {
        for q in ["", "   "] {
            let input = HotelSearchInput {
                q: Some(q.to_string()),
                search: Some("park".to_string()),
                ..Default::default()
            };
            let (filter, _) = input.into_query().unwrap();
            assert_eq!(filter.search(), Some("park"));
        }
    }

    #[test]
    fn test_search_input_rejects_bad_limit() {
        let input = HotelSearchInput {
            limit: Some(500),
            ..Default::default()
        };
        assert!(matches!(
            input.into_query(),
            Err(ListingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_card_serializes_client_field_names() {
        let card = HotelData::new(listing(None), enrichment());
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["category_name"], "호텔");
        assert_eq!(json["reviews"], 42);
        assert_eq!(json["date_range"], "5월 30일 ~ 6월 2일");
        assert_eq!(json["stay_nights"], 3);
        assert_eq!(json["hotel_type"], "호텔");
        assert!(json["max_guests"].is_u64());
        assert!(json["bathrooms"].is_u64());
        assert!(json.get("external_id").is_none());
    }

    #[test]
    fn test_card_description_prefers_imported_text() {
        let card = HotelData::new(listing(Some("바다가 보이는 호텔")), enrichment());
        assert_eq!(card.description, "바다가 보이는 호텔");

        let card = HotelData::new(listing(Some("   ")), enrichment());
        assert_eq!(card.description, "generated copy");
    }

    #[test]
    fn test_detail_has_capacity_only() {
        let detail = HotelDetailData::new(listing(None), Capacity::for_listing(ListingId::new(3)));
        let json = serde_json::to_value(&detail).unwrap();
        assert!(json["beds"].is_u64());
        assert!(json.get("price").is_none());
        assert!(json.get("badges").is_none());
    }

    #[test]
    fn test_envelope_count_matches_items() {
        let items = vec![HotelData::new(listing(None), enrichment())];
        let envelope = HotelListData::new(25, items);
        assert_eq!(envelope.total, 25);
        assert_eq!(envelope.count, 1);
    }
}
