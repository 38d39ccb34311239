//! Business services built on the repository traits.

pub mod auth;
pub mod booking;
pub mod favorites;
pub mod listing;
pub mod messaging;
pub mod record;
pub mod token;
pub mod user;

pub use auth::AuthService;
pub use booking::{BookingService, ReservationRequest};
pub use favorites::FavoriteService;
pub use listing::{ListingLocation, ListingService, NewListing};
pub use messaging::{MessagingService, SendMessage};
pub use record::RecordService;
pub use token::{TokenService, TokenServiceConfig};
pub use user::UserService;
