//! Generic repository trait.
//!
//! One CRUD contract keyed by entity type and primary-key type. Concrete
//! stores implement it for a single `(T, K)` pair and narrower traits
//! (e.g. `ClienteRepository`) name the specialization the services use.

use async_trait::async_trait;

use crate::errors::AppResult;

/// Full CRUD repository over entity `T` with primary key `K`
#[async_trait]
pub trait CrudRepository<T, K>: Send + Sync
where
    T: Send + Sync + 'static,
    K: Send + 'static,
{
    /// Find all entities
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// Find entity by primary key
    async fn find_by_id(&self, id: K) -> AppResult<Option<T>>;

    /// Insert the entity when it has no key yet, otherwise update it
    async fn save(&self, entity: T) -> AppResult<T>;

    /// Delete entity by primary key. Missing keys are not an error.
    async fn delete_by_id(&self, id: K) -> AppResult<()>;
}
