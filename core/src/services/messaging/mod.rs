//! Messaging service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{MessagingService, SendMessage};
