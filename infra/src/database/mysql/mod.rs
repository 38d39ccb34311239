//! sqlx-backed repository implementations

pub mod inbox_repository_impl;
pub mod listing_repository_impl;
pub mod table;
pub mod tables;
pub mod travel_repository_impl;
pub mod user_repository_impl;

pub use inbox_repository_impl::MySqlInboxRepository;
pub use listing_repository_impl::MySqlListingRepository;
pub use table::{MySqlRecordRepository, RowReader, SqlValue, Table};
pub use travel_repository_impl::MySqlTravelRepository;
