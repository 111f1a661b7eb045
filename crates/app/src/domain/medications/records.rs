//! Medication Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;
use rust_decimal::Decimal;
use thiserror::Error;

/// Medication ID
///
/// The `BIGINT` identity the store generates on insert. Never built from
/// client input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MedicationId(i64);

impl MedicationId {
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }
}

impl Display for MedicationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<MedicationId> for i64 {
    fn from(id: MedicationId) -> Self {
        id.0
    }
}

/// Raised when a record that already carries a store id is given another.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("medication already has id {current}")]
pub struct IdAlreadyAssigned {
    /// The id the record already holds.
    pub current: MedicationId,
}

/// Medication Record
///
/// One stored medication row held in memory. The id stays unset until the
/// store assigns one, and can be set only once after that.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationRecord {
    id: Option<MedicationId>,
    name: String,
    manufacturer: String,
    active_ingredient: String,
    price: Decimal,
    expiration_date: Date,
}

impl MedicationRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        active_ingredient: impl Into<String>,
        price: Decimal,
        expiration_date: Date,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            manufacturer: manufacturer.into(),
            active_ingredient: active_ingredient.into(),
            price,
            expiration_date,
        }
    }

    /// Store-generated id, `None` until persisted.
    #[must_use]
    pub fn id(&self) -> Option<MedicationId> {
        self.id
    }

    /// Record the id assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`IdAlreadyAssigned`] when the record already has an id.
    pub fn assign_id(&mut self, id: MedicationId) -> Result<(), IdAlreadyAssigned> {
        if let Some(current) = self.id {
            return Err(IdAlreadyAssigned { current });
        }

        self.id = Some(id);

        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) {
        self.manufacturer = manufacturer.into();
    }

    #[must_use]
    pub fn active_ingredient(&self) -> &str {
        &self.active_ingredient
    }

    pub fn set_active_ingredient(&mut self, active_ingredient: impl Into<String>) {
        self.active_ingredient = active_ingredient.into();
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    #[must_use]
    pub fn expiration_date(&self) -> Date {
        self.expiration_date
    }

    pub fn set_expiration_date(&mut self, expiration_date: Date) {
        self.expiration_date = expiration_date;
    }
}
