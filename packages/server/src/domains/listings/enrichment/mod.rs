//! Synthetic display attributes computed at request time.
//!
//! Nothing here is persisted. Capacity is derived from a generator seeded by
//! the listing id, so it stays stable across visits. Every other field draws
//! from the ambient generator passed in and may change between requests.

pub mod capacity;
pub mod copy;
pub mod stay;

use chrono::NaiveDate;
use rand::Rng;

use crate::common::ListingId;

pub use capacity::Capacity;
pub use copy::HotelType;
pub use stay::{reference_today, StayWindow};

const PRICE_STEP: i64 = 10_000;
const MIN_PRICE_STEPS: i64 = 5;
const MAX_PRICE_STEPS: i64 = 55;

/// Decoration merged into a listing card.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    /// Nightly price in KRW, a multiple of 10,000 in [50,000, 550,000]
    pub price: i64,
    /// Rating in [3.8, 5.0], two decimal places
    pub rating: f64,
    pub review_count: u32,
    pub stay: StayWindow,
    pub capacity: Capacity,
    pub hotel_type: HotelType,
    pub description: String,
    pub urgency_message: Option<String>,
    pub badges: Vec<String>,
}

impl Enrichment {
    /// Decorate `id` using the caller's generator for the varying fields.
    pub fn generate<R: Rng + ?Sized>(id: ListingId, today: NaiveDate, rng: &mut R) -> Self {
        Self {
            price: rng.gen_range(MIN_PRICE_STEPS..=MAX_PRICE_STEPS) * PRICE_STEP,
            rating: (rng.gen_range(3.8..=5.0_f64) * 100.0).round() / 100.0,
            review_count: rng.gen_range(10..=300),
            stay: StayWindow::generate(today, rng),
            capacity: Capacity::for_listing(id),
            hotel_type: HotelType::random(rng),
            description: copy::description(rng),
            urgency_message: copy::urgency_message(rng),
            badges: copy::badges(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_numeric_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        for raw in 1..=1_000 {
            let e = Enrichment::generate(ListingId::new(raw), today(), &mut rng);
            assert!((50_000..=550_000).contains(&e.price), "price {}", e.price);
            assert_eq!(e.price % PRICE_STEP, 0);
            assert!((3.8..=5.0).contains(&e.rating), "rating {}", e.rating);
            assert_eq!((e.rating * 100.0).round() / 100.0, e.rating);
            assert!((10..=300).contains(&e.review_count));
        }
    }

    #[test]
    fn test_capacity_ignores_ambient_rng() {
        let id = ListingId::new(77);
        let first = Enrichment::generate(id, today(), &mut StdRng::seed_from_u64(1));
        let second = Enrichment::generate(id, today(), &mut StdRng::seed_from_u64(999));
        assert_eq!(first.capacity, second.capacity);
        assert_eq!(first.capacity, Capacity::for_listing(id));
    }

    #[test]
    fn test_varying_fields_come_from_ambient_rng() {
        let id = ListingId::new(5);
        let mut rng = StdRng::seed_from_u64(8);
        let prices: std::collections::HashSet<i64> = (0..50)
            .map(|_| Enrichment::generate(id, today(), &mut rng).price)
            .collect();
        assert!(prices.len() > 1);
    }

    #[test]
    fn test_same_ambient_seed_reproduces_output() {
        let id = ListingId::new(12);
        let a = Enrichment::generate(id, today(), &mut StdRng::seed_from_u64(4));
        let b = Enrichment::generate(id, today(), &mut StdRng::seed_from_u64(4));
        assert_eq!(a, b);
    }
}
