//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{ClienteStore, Database};
use crate::services::{ClienteManager, ClienteService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Cliente service
    pub cliente_service: Arc<dyn ClienteService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SQL-backed repository and service over a database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(ClienteStore::new(Arc::clone(&database)));
        let cliente_service = Arc::new(ClienteManager::new(repo));

        Self {
            cliente_service,
            database,
        }
    }

    /// Create new application state with a manually injected service.
    pub fn new(cliente_service: Arc<dyn ClienteService>, database: Arc<Database>) -> Self {
        Self {
            cliente_service,
            database,
        }
    }
}
