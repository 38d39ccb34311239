//! Database module: connection pool, error mapping and MySQL repositories

pub mod connection;
pub mod error;
pub mod mysql;


use std::sync::Arc;

use sqlx::MySqlPool;

use jb_core::repositories::Repositories;

pub use connection::DatabasePool;
pub use error::map_sqlx_error;
pub use mysql::{
    MySqlInboxRepository, MySqlListingRepository, MySqlRecordRepository, MySqlTravelRepository,
};

/// Repositories over a MySQL pool
pub fn mysql_repositories(pool: MySqlPool) -> Repositories {
    Repositories {
        users: Arc::new(MySqlRecordRepository::new(pool.clone())),
        listings: Arc::new(MySqlListingRepository::new(pool.clone())),
        inbox: Arc::new(MySqlInboxRepository::new(pool.clone())),
        travels: Arc::new(MySqlTravelRepository::new(pool.clone())),
        locations: Arc::new(MySqlRecordRepository::new(pool.clone())),
        type_lists: Arc::new(MySqlRecordRepository::new(pool.clone())),
        types: Arc::new(MySqlRecordRepository::new(pool.clone())),
        features: Arc::new(MySqlRecordRepository::new(pool.clone())),
        open_close: Arc::new(MySqlRecordRepository::new(pool.clone())),
        rules: Arc::new(MySqlRecordRepository::new(pool.clone())),
        ratings: Arc::new(MySqlRecordRepository::new(pool.clone())),
        rates: Arc::new(MySqlRecordRepository::new(pool.clone())),
        properties: Arc::new(MySqlRecordRepository::new(pool.clone())),
        item_descriptions: Arc::new(MySqlRecordRepository::new(pool.clone())),
        messages: Arc::new(MySqlRecordRepository::new(pool.clone())),
        likes: Arc::new(MySqlRecordRepository::new(pool.clone())),
        comments: Arc::new(MySqlRecordRepository::new(pool.clone())),
        reservations: Arc::new(MySqlRecordRepository::new(pool.clone())),
        applications: Arc::new(MySqlRecordRepository::new(pool.clone())),
        invoices: Arc::new(MySqlRecordRepository::new(pool.clone())),
        payments: Arc::new(MySqlRecordRepository::new(pool.clone())),
        invoice_lines: Arc::new(MySqlRecordRepository::new(pool)),
    }
}
