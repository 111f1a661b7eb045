//! Medication Errors

use salvo::http::StatusError;
use tracing::error;

use dispensary_app::domain::medications::MedicationsServiceError;

pub(crate) fn into_status_error(error: MedicationsServiceError) -> StatusError {
    match error {
        MedicationsServiceError::NotFound => StatusError::not_found().brief("Medication not found"),
        MedicationsServiceError::MissingRequiredData | MedicationsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid medication payload")
        }
        MedicationsServiceError::Sql(source) => {
            error!("medication storage failure: {source}");

            StatusError::internal_server_error()
        }
        MedicationsServiceError::MissingGeneratedId => {
            error!("medication insert returned no row");

            StatusError::internal_server_error()
        }
    }
}
