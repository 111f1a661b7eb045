//! Find Medication Handlers

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dispensary_app::domain::medications::{MedicationsServiceError, data::SearchField};

use crate::{
    extensions::*,
    medications::{errors::into_status_error, responses::MedicationResponse},
};

/// Medication Lookup Response
///
/// `medication` is `null` when nothing matched.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MedicationLookupResponse {
    pub medication: Option<MedicationResponse>,
}

/// Find Medication By Name Handler
#[endpoint(
    tags("medications"),
    summary = "Find Medication By Name",
    responses(
        (status_code = StatusCode::OK, description = "First medication with this exact name, or null"),
        (status_code = StatusCode::BAD_REQUEST, description = "Blank name"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn by_name(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MedicationLookupResponse>, StatusError> {
    find(depot, SearchField::Name, name.into_inner()).await
}

/// Find Medication By Active Ingredient Handler
#[endpoint(
    tags("medications"),
    summary = "Find Medication By Active Ingredient",
    responses(
        (status_code = StatusCode::OK, description = "First medication with this exact active ingredient, or null"),
        (status_code = StatusCode::BAD_REQUEST, description = "Blank active ingredient"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn by_active_ingredient(
    active_ingredient: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MedicationLookupResponse>, StatusError> {
    find(
        depot,
        SearchField::ActiveIngredient,
        active_ingredient.into_inner(),
    )
    .await
}

async fn find(
    depot: &Depot,
    field: SearchField,
    value: String,
) -> Result<Json<MedicationLookupResponse>, StatusError> {
    if value.trim().is_empty() {
        return Err(StatusError::bad_request()
            .brief("Search value must not be blank")
            .detail(format!("{} is required", field.as_str())));
    }

    if value.contains('\0') {
        return Err(StatusError::bad_request()
            .brief("Search value must not contain NUL bytes")
            .detail(format!("{} is not valid text", field.as_str())));
    }

    let state = depot.state_or_500()?;

    let medication = match state.medications.find_medication(field, value).await {
        Ok(medication) => Some(medication.into()),
        Err(MedicationsServiceError::NotFound) => None,
        Err(error) => return Err(into_status_error(error)),
    };

    Ok(Json(MedicationLookupResponse { medication }))
}
