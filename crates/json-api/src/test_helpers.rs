//! Test helpers.

use std::sync::Arc;

use jiff::civil::date;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use dispensary_app::domain::medications::{
    MockMedicationsService,
    records::{IdAlreadyAssigned, MedicationId, MedicationRecord},
};

use crate::state::State;

fn state_with_medications(medications: MockMedicationsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(medications)))
}

pub(crate) fn medications_service(medications: MockMedicationsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_medications(medications)))
            .push(route),
    )
}

/// A persisted medication made by Acme, priced 9.90 and expiring 2026-01-01.
pub(crate) fn make_medication(
    id: i64,
    name: &str,
    active_ingredient: &str,
) -> Result<MedicationRecord, IdAlreadyAssigned> {
    let mut record = MedicationRecord::new(
        name,
        "Acme",
        active_ingredient,
        Decimal::new(990, 2),
        date(2026, 1, 1),
    );

    record.assign_id(MedicationId::from_i64(id))?;

    Ok(record)
}
