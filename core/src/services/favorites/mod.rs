//! Favorites service module

mod service;

#[cfg(test)]
mod tests;

pub use service::FavoriteService;
