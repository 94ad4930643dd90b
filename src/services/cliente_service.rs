//! Cliente service - Use cases over the cliente repository.
//!
//! Pure delegation: lookups, insert-or-update and delete are forwarded to
//! the repository unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Cliente;
use crate::errors::AppResult;
use crate::infra::ClienteRepository;

/// Cliente service trait for dependency injection.
#[async_trait]
pub trait ClienteService: Send + Sync {
    /// List every stored cliente
    async fn find_all(&self) -> AppResult<Vec<Cliente>>;

    /// Get a cliente by ID, `None` when it does not exist
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Cliente>>;

    /// Insert a new cliente (no id) or update an existing one
    async fn save(&self, cliente: Cliente) -> AppResult<Cliente>;

    /// Delete by ID; deleting a missing ID succeeds
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ClienteService.
pub struct ClienteManager<R: ClienteRepository> {
    repo: Arc<R>,
}

impl<R: ClienteRepository> ClienteManager<R> {
    /// Create new service instance over a repository
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: ClienteRepository> ClienteService for ClienteManager<R> {
    async fn find_all(&self) -> AppResult<Vec<Cliente>> {
        self.repo.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Cliente>> {
        self.repo.find_by_id(id).await
    }

    async fn save(&self, cliente: Cliente) -> AppResult<Cliente> {
        if cliente.is_persisted() {
            tracing::debug!(id = ?cliente.id, "Updating cliente");
        } else {
            tracing::debug!("Inserting new cliente");
        }
        self.repo.save(cliente).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        tracing::debug!(id, "Deleting cliente");
        self.repo.delete_by_id(id).await
    }
}
