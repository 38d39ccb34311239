//! Value objects and read models assembled from several entities.

pub mod auth_response;
pub mod listing;
pub mod travel;

pub use auth_response::{AccessToken, LoginOutcome};
pub use listing::{Listing, ListingSearch};
pub use travel::Travel;
