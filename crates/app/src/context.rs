//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, DatabaseSettings, Db},
    domain::medications::{MedicationsService, PgMedicationsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to configure database pool")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub medications: Arc<dyn MedicationsService>,
    db: Db,
}

impl AppContext {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            medications: Arc::new(PgMedicationsService::new(db.clone())),
            db,
        }
    }

    /// Build application context from database settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the database settings cannot produce a pool.
    pub fn from_settings(settings: &DatabaseSettings) -> Result<Self, AppInitError> {
        let db = database::connect(settings).map_err(AppInitError::Database)?;

        Ok(Self::new(db))
    }

    /// Whether the store answers the liveness probe.
    pub async fn is_store_available(&self) -> bool {
        self.db.health_check().await
    }
}
