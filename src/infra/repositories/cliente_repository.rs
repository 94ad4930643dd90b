//! Cliente repository backed by SeaORM.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

use super::base::CrudRepository;
use super::entities::cliente::{self, ActiveModel, Entity as ClienteEntity};
use crate::domain::Cliente;
use crate::infra::db::Database;
use crate::errors::AppResult;

/// Data access for `Cliente` records keyed by `i64`
pub trait ClienteRepository: CrudRepository<Cliente, i64> {}

impl<R> ClienteRepository for R where R: CrudRepository<Cliente, i64> {}

/// Concrete SQL implementation of ClienteRepository
pub struct ClienteStore {
    db: Arc<Database>,
}

impl ClienteStore {
    /// Create new repository instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Cliente, i64> for ClienteStore {
    async fn find_all(&self) -> AppResult<Vec<Cliente>> {
        let models = ClienteEntity::find()
            .order_by_asc(cliente::Column::Id)
            .all(self.db.connection())
            .await?;

        Ok(models.into_iter().map(Cliente::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Cliente>> {
        let result = ClienteEntity::find_by_id(id).one(self.db.connection()).await?;

        Ok(result.map(Cliente::from))
    }

    async fn save(&self, entity: Cliente) -> AppResult<Cliente> {
        let model = match entity.id {
            None => {
                let active_model = ActiveModel {
                    id: NotSet,
                    nombre: Set(entity.nombre),
                    apellido: Set(entity.apellido),
                    email: Set(entity.email),
                    create_at: Set(entity.create_at),
                };
                active_model.insert(self.db.connection()).await?
            }
            Some(id) => {
                // create_at stays Unchanged so the UPDATE never touches it
                let active_model = ActiveModel {
                    id: Unchanged(id),
                    nombre: Set(entity.nombre),
                    apellido: Set(entity.apellido),
                    email: Set(entity.email),
                    create_at: Unchanged(entity.create_at),
                };
                active_model.update(self.db.connection()).await?
            }
        };

        Ok(Cliente::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = ClienteEntity::delete_by_id(id).exec(self.db.connection()).await?;
        tracing::debug!(id, rows_affected = result.rows_affected, "Cliente delete executed");
        Ok(())
    }
}

#[cfg(any(test, feature = "test-utils"))]
mockall::mock! {
    pub ClienteRepository {}

    #[async_trait]
    impl CrudRepository<Cliente, i64> for ClienteRepository {
        async fn find_all(&self) -> AppResult<Vec<Cliente>>;
        async fn find_by_id(&self, id: i64) -> AppResult<Option<Cliente>>;
        async fn save(&self, entity: Cliente) -> AppResult<Cliente>;
        async fn delete_by_id(&self, id: i64) -> AppResult<()>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use crate::errors::AppError;

    fn store_over(backend: MockDatabase) -> ClienteStore {
        ClienteStore::new(Arc::new(Database::from_connection(backend.into_connection())))
    }

    fn model(id: i64) -> cliente::Model {
        cliente::Model {
            id,
            nombre: "Ana".to_string(),
            apellido: Some("Diaz".to_string()),
            email: Some(format!("ana{}@x.com", id)),
            create_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_find_all_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1), model(2)]]);
        let store = store_over(db);

        let clientes = store.find_all().await.unwrap();
        assert_eq!(clientes.len(), 2);
        assert_eq!(clientes[0].id, Some(1));
        assert_eq!(clientes[1].email.as_deref(), Some("ana2@x.com"));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<cliente::Model>::new()]);
        let store = store_over(db);

        assert!(store.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_without_id_inserts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(10)]]);
        let store = store_over(db);

        let unsaved = Cliente {
            id: None,
            nombre: "Ana".to_string(),
            apellido: Some("Diaz".to_string()),
            email: Some("ana10@x.com".to_string()),
            create_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        };

        let saved = store.save(unsaved).await.unwrap();
        assert_eq!(saved.id, Some(10));
        assert!(saved.is_persisted());
    }

    #[tokio::test]
    async fn test_save_with_id_updates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3)]]);
        let store = store_over(db);

        let saved = store.save(Cliente::from(model(3))).await.unwrap();
        assert_eq!(saved.id, Some(3));
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }]);
        let store = store_over(db);

        assert!(store.delete_by_id(999).await.is_ok());
    }

    #[tokio::test]
    async fn test_query_failure_surfaces_as_persistence_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())]);
        let store = store_over(db);

        let err = store.find_by_id(1).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence { .. }));
    }
}
