//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::{Context, Result};
use sqlx::PgPool;
use staywise_core::domains::listings::{Listing, NewListing};

/// Build an import record with only the required fields set
pub fn new_listing(name: &str, external_id: &str) -> NewListing {
    NewListing {
        name: name.to_string(),
        external_id: external_id.to_string(),
        ..Default::default()
    }
}

/// Import a listing, failing if its external ID already exists
pub async fn create_listing(pool: &PgPool, input: NewListing) -> Result<Listing> {
    Listing::create_if_absent(input, pool)
        .await?
        .context("Listing with this external ID already exists")
}

/// Import `count` listings named "Hotel 1".."Hotel N" in id order
pub async fn create_numbered_listings(pool: &PgPool, count: usize) -> Result<Vec<Listing>> {
    let mut listings = Vec::with_capacity(count);
    for n in 1..=count {
        let listing = create_listing(
            pool,
            NewListing {
                name: format!("Hotel {}", n),
                address: Some(format!("서울 중구 {}번길", n)),
                category: Some("B02010100".to_string()),
                external_id: format!("content-{}", n),
                ..Default::default()
            },
        )
        .await?;
        listings.push(listing);
    }
    Ok(listings)
}
