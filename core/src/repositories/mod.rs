//! Repository traits and their in-memory implementations.

pub mod booking;
pub mod context;
pub mod listing;
pub mod message;
pub mod record;
pub mod user;

pub use booking::{InMemoryTravelRepository, TravelRepository};
pub use context::{Repositories, RepositoryFor};
pub use listing::{InMemoryListingRepository, ListingRepository};
pub use message::{InMemoryInboxRepository, InboxRepository};
pub use record::{InMemoryRepository, RecordRepository};
pub use user::UserRepository;
