//! Medication Responses

use jiff::civil::Date;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use dispensary_app::domain::medications::records::MedicationRecord;

/// Medication Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MedicationResponse {
    /// Store-generated identifier
    pub id: Option<i64>,
    pub name: String,
    pub manufacturer: String,
    pub active_ingredient: String,
    /// Exact decimal price, serialized as a string such as `"9.90"`
    #[salvo(schema(value_type = String))]
    pub price: Decimal,
    /// Calendar date, `YYYY-MM-DD`
    #[salvo(schema(value_type = String))]
    pub expiration_date: Date,
}

impl From<MedicationRecord> for MedicationResponse {
    fn from(record: MedicationRecord) -> Self {
        Self {
            id: record.id().map(i64::from),
            name: record.name().to_string(),
            manufacturer: record.manufacturer().to_string(),
            active_ingredient: record.active_ingredient().to_string(),
            price: record.price(),
            expiration_date: record.expiration_date(),
        }
    }
}
