use axum::extract::Extension;
use axum::Json;

use crate::domains::listings::HotelStatsData;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// Listing totals per category
pub async fn stats_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<HotelStatsData>, ApiError> {
    let stats = state.listings.stats().await?;
    Ok(Json(stats))
}
