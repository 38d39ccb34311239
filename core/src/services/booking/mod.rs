//! Booking service module

mod service;


pub use service::{BookingService, ReservationRequest};
