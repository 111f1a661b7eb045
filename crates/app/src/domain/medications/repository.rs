//! Medications Repository

use jiff_sqlx::Date as SqlxDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::medications::{
    data::{NewMedication, SearchField},
    records::{MedicationId, MedicationRecord},
};

const LIST_MEDICATIONS_SQL: &str = include_str!("sql/list_medications.sql");
const CREATE_MEDICATION_SQL: &str = include_str!("sql/create_medication.sql");
const FIND_MEDICATION_BY_NAME_SQL: &str = include_str!("sql/find_medication_by_name.sql");
const FIND_MEDICATION_BY_ACTIVE_INGREDIENT_SQL: &str =
    include_str!("sql/find_medication_by_active_ingredient.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMedicationsRepository;

impl PgMedicationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_medications(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<MedicationRecord>, sqlx::Error> {
        query_as::<Postgres, MedicationRecord>(LIST_MEDICATIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert a row and read it back as stored, generated id and rounding included.
    pub(crate) async fn create_medication(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        medication: &NewMedication,
    ) -> Result<Option<MedicationRecord>, sqlx::Error> {
        query_as::<Postgres, MedicationRecord>(CREATE_MEDICATION_SQL)
            .bind(&medication.name)
            .bind(&medication.manufacturer)
            .bind(&medication.active_ingredient)
            .bind(medication.price)
            .bind(SqlxDate::from(medication.expiration_date))
            .fetch_optional(&mut **tx)
            .await
    }

    /// First matching row by ascending id, so duplicates resolve to the oldest row.
    pub(crate) async fn find_medication(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        field: SearchField,
        value: &str,
    ) -> Result<Option<MedicationRecord>, sqlx::Error> {
        let sql = match field {
            SearchField::Name => FIND_MEDICATION_BY_NAME_SQL,
            SearchField::ActiveIngredient => FIND_MEDICATION_BY_ACTIVE_INGREDIENT_SQL,
        };

        query_as::<Postgres, MedicationRecord>(sql)
            .bind(value)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for MedicationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let mut record = MedicationRecord::new(
            row.try_get::<String, _>("name")?,
            row.try_get::<String, _>("manufacturer")?,
            row.try_get::<String, _>("active_ingredient")?,
            row.try_get::<Decimal, _>("price")?,
            row.try_get::<SqlxDate, _>("expiration_date")?.to_jiff(),
        );

        record
            .assign_id(MedicationId::from_i64(row.try_get("id")?))
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "id".to_string(),
                source: Box::new(e),
            })?;

        Ok(record)
    }
}
