//! List Medications Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, medications::responses::MedicationResponse};

/// Medications Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MedicationsResponse {
    pub medications: Vec<MedicationResponse>,
}

/// List Medications Handler
#[endpoint(
    tags("medications"),
    summary = "List Medications",
    responses(
        (status_code = StatusCode::OK, description = "Every stored medication, ordered by id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<MedicationsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let medications = state
        .medications
        .list_medications()
        .await
        .or_500("failed to list medications")?;

    Ok(Json(MedicationsResponse {
        medications: medications.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use dispensary_app::domain::medications::{MedicationsServiceError, MockMedicationsService};

    use crate::test_helpers::{make_medication, medications_service};

    use super::*;

    fn make_service(medications: MockMedicationsService) -> Service {
        medications_service(medications, Router::with_path("medications").get(handler))
    }

    #[tokio::test]
    async fn test_list_medications_returns_all_in_order() -> TestResult {
        let first = make_medication(1, "Tylenol", "Paracetamol")?;
        let second = make_medication(2, "Advil", "Ibuprofen")?;

        let mut medications = MockMedicationsService::new();

        medications
            .expect_list_medications()
            .once()
            .return_once(move || Ok(vec![first, second]));

        medications.expect_create_medication().never();
        medications.expect_find_medication().never();

        let mut res = TestClient::get("http://example.com/medications")
            .send(&make_service(medications))
            .await;

        let body: MedicationsResponse = res.take_json().await?;

        let listed: Vec<(Option<i64>, &str)> = body
            .medications
            .iter()
            .map(|m| (m.id, m.name.as_str()))
            .collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(listed, vec![(Some(1), "Tylenol"), (Some(2), "Advil")]);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_medications_empty_store_returns_empty_array() -> TestResult {
        let mut medications = MockMedicationsService::new();

        medications
            .expect_list_medications()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/medications")
            .send(&make_service(medications))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, serde_json::json!({ "medications": [] }));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_medications_store_failure_returns_500() {
        let mut medications = MockMedicationsService::new();

        medications
            .expect_list_medications()
            .once()
            .return_once(|| Err(MedicationsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/medications")
            .send(&make_service(medications))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
