//! State

use std::sync::Arc;

use dispensary_app::{context::AppContext, domain::medications::MedicationsService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) medications: Arc<dyn MedicationsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(medications: Arc<dyn MedicationsService>) -> Self {
        Self { medications }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: &AppContext) -> Arc<Self> {
        Arc::new(Self::new(Arc::clone(&app.medications)))
    }
}
