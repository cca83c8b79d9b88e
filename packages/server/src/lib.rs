// Staywise - Lodging Search API Core
//
// This crate serves paginated search and detail lookup over imported lodging
// listings, decorated at request time with synthetic display attributes.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
