pub mod ride_service;

pub use ride_service::*;
