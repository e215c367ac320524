//! Application state shared with every handler.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::CityStore;
use crate::service::{CityManager, CityService};

/// Application state containing services and the session provider.
#[derive(Clone)]
pub struct AppState {
    /// City service
    pub city_service: Arc<dyn CityService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create new application state with an injected service.
    pub fn new(city_service: Arc<dyn CityService>, database: Arc<Database>) -> Self {
        Self {
            city_service,
            database,
        }
    }

    /// Wire the repository and service on top of a connected database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let city_repo = Arc::new(CityStore::new(database.get_connection()));
        let city_service = Arc::new(CityManager::new(city_repo));

        Self::new(city_service, database)
    }
}
