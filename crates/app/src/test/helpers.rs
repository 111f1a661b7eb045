//! Test Helpers

use jiff::civil::date;
use rust_decimal::Decimal;

use crate::domain::medications::data::NewMedication;

pub(crate) fn new_medication(name: &str, active_ingredient: &str) -> NewMedication {
    NewMedication {
        name: name.to_string(),
        manufacturer: "Acme".to_string(),
        active_ingredient: active_ingredient.to_string(),
        price: Decimal::new(990, 2),
        expiration_date: date(2026, 1, 1),
    }
}
