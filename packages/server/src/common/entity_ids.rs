//! Typed ID definitions for domain entities.

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Listing entities (imported lodging records).
pub struct Listing;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Listing entities.
pub type ListingId = Id<Listing>;
