//! Guest and room capacity, stable per listing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::common::ListingId;

const GUEST_OPTIONS: [u32; 4] = [2, 4, 6, 8];

/// Room layout shown on both the list card and the detail view.
///
/// Always satisfies `1 <= bathrooms <= bedrooms <= beds <= max_guests`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capacity {
    pub max_guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub bathrooms: u32,
}

impl Capacity {
    /// Capacity for a listing, seeded by its id.
    ///
    /// The generator is local to the call, so repeated lookups agree and the
    /// ambient generator used for the other fields is never reseeded.
    pub fn for_listing(id: ListingId) -> Self {
        let mut rng = StdRng::seed_from_u64(id.into_inner() as u64);
        Self::generate(&mut rng)
    }

    pub(crate) fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let max_guests = GUEST_OPTIONS[rng.gen_range(0..GUEST_OPTIONS.len())];

        let bedrooms = match max_guests {
            0..=2 => 1,
            3..=4 => rng.gen_range(1..=2),
            _ => rng.gen_range(2..=4),
        };

        // A 6-guest layout can draw 4 bedrooms, so the floor is raised to
        // keep at least one bed per bedroom.
        let beds = rng.gen_range((max_guests / 2).max(bedrooms)..=max_guests);

        let bathrooms = bedrooms.saturating_sub(rng.gen_range(0..=1)).max(1);

        Self {
            max_guests,
            bedrooms,
            beds,
            bathrooms,
        }
    }
}
