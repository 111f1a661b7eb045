//! Medication Handlers

pub(crate) mod create;
pub(crate) mod find;
pub(crate) mod index;
