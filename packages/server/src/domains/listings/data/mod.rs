pub mod hotel;

pub use hotel::{HotelData, HotelDetailData, HotelListData, HotelSearchInput, HotelStatsData};
