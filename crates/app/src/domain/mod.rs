//! Dispensary Domain Concerns

pub mod medications;
