// HTTP routes
pub mod health;
pub mod hotels;
pub mod stats;

pub use health::*;
pub use hotels::*;
pub use stats::*;
