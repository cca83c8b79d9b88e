pub mod category;
pub mod listing;

pub use category::{category_label, is_all_categories, ALL_CATEGORIES, UNCATEGORIZED_LABEL};
pub use listing::{Listing, ListingFilter, NewListing};
