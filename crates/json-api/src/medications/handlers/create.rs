//! Create Medication Handler

use jiff::civil::Date;
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dispensary_app::domain::medications::data::NewMedication;

use crate::{extensions::*, medications::errors::into_status_error};

/// Create Medication Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateMedicationRequest {
    /// Must be absent; the store assigns ids
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub manufacturer: String,
    pub active_ingredient: String,
    /// Exact decimal price, e.g. `"9.90"`
    #[salvo(schema(value_type = String))]
    pub price: Decimal,
    /// Calendar date, `YYYY-MM-DD`
    #[salvo(schema(value_type = String))]
    pub expiration_date: Date,
}

impl CreateMedicationRequest {
    fn validate(&self) -> Result<(), StatusError> {
        if self.id.is_some() {
            return Err(StatusError::bad_request()
                .brief("Invalid medication payload")
                .detail("id is assigned by the store and must not be supplied"));
        }

        let text_fields = [
            ("name", &self.name),
            ("manufacturer", &self.manufacturer),
            ("active_ingredient", &self.active_ingredient),
        ];

        for (field, value) in text_fields {
            let problem = if value.trim().is_empty() {
                "must not be blank"
            } else if value.contains('\0') {
                "must not contain NUL bytes"
            } else {
                continue;
            };

            return Err(StatusError::bad_request()
                .brief("Invalid medication payload")
                .detail(format!("{field} {problem}")));
        }

        Ok(())
    }
}

impl From<CreateMedicationRequest> for NewMedication {
    fn from(request: CreateMedicationRequest) -> Self {
        NewMedication {
            name: request.name,
            manufacturer: request.manufacturer,
            active_ingredient: request.active_ingredient,
            price: request.price,
            expiration_date: request.expiration_date,
        }
    }
}

/// Medication Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MedicationCreatedResponse {
    /// Store-generated identifier
    pub id: i64,
}

/// Create Medication Handler
#[endpoint(
    tags("medications"),
    summary = "Create Medication",
    responses(
        (status_code = StatusCode::CREATED, description = "Medication created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateMedicationRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MedicationCreatedResponse>, StatusError> {
    let request = json.into_inner();

    request.validate()?;

    let state = depot.state_or_500()?;

    let id = state
        .medications
        .create_medication(request.into())
        .await
        .map_err(into_status_error)?
        .id()
        .ok_or("created medication carries no id")
        .or_500("failed to create medication")?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(MedicationCreatedResponse { id: id.into() }))
}
