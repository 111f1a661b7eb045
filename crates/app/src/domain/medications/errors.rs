//! Medications service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MedicationsServiceError {
    #[error("medication not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("insert returned no row")]
    MissingGeneratedId,

    #[error("storage error")]
    Sql(#[source] Error),
}

/// SQLSTATE class 22: the statement was fine but a value was not.
fn is_data_exception(error: &dyn DatabaseError) -> bool {
    error.code().is_some_and(|code| code.starts_with("22"))
}

impl From<Error> for MedicationsServiceError {
    fn from(error: Error) -> Self {
        let classified = error
            .as_database_error()
            .map(|db_error| (db_error.kind(), is_data_exception(db_error)));

        match classified {
            Some((ErrorKind::NotNullViolation, _)) => Self::MissingRequiredData,
            Some((ErrorKind::CheckViolation, _) | (_, true)) => Self::InvalidData,
            _ if matches!(error, Error::RowNotFound) => Self::NotFound,
            _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = MedicationsServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, MedicationsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn transport_failure_maps_to_sql() {
        let error = MedicationsServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, MedicationsServiceError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }
}
