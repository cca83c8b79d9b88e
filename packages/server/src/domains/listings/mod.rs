//! Listings domain - lodging search and detail lookup

pub mod actions;
pub mod data;
pub mod enrichment;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use actions::ListingQueries;
pub use data::{HotelData, HotelDetailData, HotelListData, HotelSearchInput, HotelStatsData};
pub use error::{ListingError, ListingResult};
pub use models::{Listing, ListingFilter, NewListing};
