use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auto::{repo::seaorm::SeaOrmAutoRepository, repository::AutoRepository, AutoService};

/// Shared handler state. Cloned per request; holds only the service handle.
#[derive(Clone)]
pub struct ServerState {
    pub autos: Arc<AutoService>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmAutoRepository::new(db)))
    }

    pub fn with_repository(repo: Arc<dyn AutoRepository>) -> Self {
        Self { autos: Arc::new(AutoService::new(repo)) }
    }
}
