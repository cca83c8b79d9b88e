use thiserror::Error;

use crate::common::ListingId;

/// Errors surfaced by the listing store and query service
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Listing {0} not found")]
    NotFound(ListingId),

    #[error("Listing store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type ListingResult<T> = Result<T, ListingError>;
