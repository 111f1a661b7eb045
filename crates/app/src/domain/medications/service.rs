//! Medications service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::medications::{
        data::{NewMedication, SearchField},
        errors::MedicationsServiceError,
        records::MedicationRecord,
        repository::PgMedicationsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgMedicationsService {
    db: Db,
    repository: PgMedicationsRepository,
}

impl PgMedicationsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMedicationsRepository::new(),
        }
    }
}

#[async_trait]
impl MedicationsService for PgMedicationsService {
    async fn list_medications(&self) -> Result<Vec<MedicationRecord>, MedicationsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let medications = self.repository.list_medications(&mut tx).await?;

        tx.commit().await?;

        Ok(medications)
    }

    async fn create_medication(
        &self,
        medication: NewMedication,
    ) -> Result<MedicationRecord, MedicationsServiceError> {
        if !medication.has_storable_price() {
            debug!(price = %medication.price, "price does not fit NUMERIC(12, 2)");

            return Err(MedicationsServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_medication(&mut tx, &medication)
            .await?
            .ok_or(MedicationsServiceError::MissingGeneratedId)?;

        tx.commit().await?;

        info!(medication_id = ?created.id(), "created medication");

        Ok(created)
    }

    async fn find_medication(
        &self,
        field: SearchField,
        value: String,
    ) -> Result<MedicationRecord, MedicationsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let medication = self
            .repository
            .find_medication(&mut tx, field, &value)
            .await?;

        tx.commit().await?;

        medication.ok_or_else(|| {
            debug!(field = field.as_str(), value = %value, "no medication matched");

            MedicationsServiceError::NotFound
        })
    }
}

#[automock]
#[async_trait]
pub trait MedicationsService: Send + Sync {
    /// Retrieves every medication, ordered by id.
    async fn list_medications(&self) -> Result<Vec<MedicationRecord>, MedicationsServiceError>;

    /// Inserts a medication and returns the row exactly as stored.
    ///
    /// Prices that `NUMERIC(12, 2)` would round or overflow are rejected with
    /// `InvalidData` before reaching the store.
    async fn create_medication(
        &self,
        medication: NewMedication,
    ) -> Result<MedicationRecord, MedicationsServiceError>;

    /// Retrieves one medication whose `field` equals `value`.
    ///
    /// `value` must be non-empty; callers reject blank input before getting here.
    /// When several rows match, the one with the lowest id is returned.
    async fn find_medication(
        &self,
        field: SearchField,
        value: String,
    ) -> Result<MedicationRecord, MedicationsServiceError>;
}
