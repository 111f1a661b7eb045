//! Medications

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::MedicationsServiceError;
pub use service::*;
