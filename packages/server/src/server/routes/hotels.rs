//! Hotel search and detail endpoints.
//!
//! GET /hotels?q=&category=&limit=&page=&offset=
//! GET /hotels/:id

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Extension, Path, Query};
use axum::Json;

use crate::common::ListingId;
use crate::domains::listings::{HotelDetailData, HotelListData, HotelSearchInput};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// Paginated hotel search.
pub async fn list_hotels_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<HotelSearchInput>, QueryRejection>,
) -> Result<Json<HotelListData>, ApiError> {
    let Query(input) = query.map_err(|rejection| ApiError::InvalidArgument(rejection.body_text()))?;
    let (filter, page) = input.into_query()?;

    let hotels = state.listings.list(&filter, page).await?;
    Ok(Json(hotels))
}

/// Single hotel with its stable room layout.
pub async fn get_hotel_handler(
    Extension(state): Extension<AxumAppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<HotelDetailData>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::InvalidArgument(rejection.body_text()))?;

    let hotel = state.listings.get(ListingId::new(id)).await?;
    Ok(Json(hotel))
}
