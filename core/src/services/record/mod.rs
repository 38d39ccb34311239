//! Generic record service module

mod service;


pub use service::RecordService;
