//! User service module

mod service;


pub use service::UserService;
