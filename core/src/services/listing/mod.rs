//! Listing service module

mod service;


pub use service::{ListingLocation, ListingService, NewListing};
