//! Medications Data

use jiff::civil::Date;
use rust_decimal::Decimal;

/// Exclusive upper bound of a `NUMERIC(12, 2)` price.
// 10_000_000_000 split into 32-bit words: lo = 1_410_065_408, mid = 2.
const PRICE_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

/// Decimal places the store keeps for a price.
const PRICE_SCALE: u32 = 2;

/// New Medication Data
///
/// Every business field is required; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedication {
    pub name: String,
    pub manufacturer: String,
    pub active_ingredient: String,
    pub price: Decimal,
    pub expiration_date: Date,
}

impl NewMedication {
    /// Whether the store can hold `price` without rounding it.
    ///
    /// Postgres silently rounds extra decimal places on `NUMERIC(12, 2)`, so a
    /// price like `9.999` has to be refused here. Trailing zeros are fine.
    #[must_use]
    pub fn has_storable_price(&self) -> bool {
        self.price >= Decimal::ZERO
            && self.price < PRICE_LIMIT
            && self.price.normalize().scale() <= PRICE_SCALE
    }
}

/// Column a single-medication lookup matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    ActiveIngredient,
}

impl SearchField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ActiveIngredient => "active_ingredient",
        }
    }
}
