//! Cliente database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Cliente;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    pub apellido: Option<String>,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub create_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Cliente {
    fn from(model: Model) -> Self {
        Cliente {
            id: Some(model.id),
            nombre: model.nombre,
            apellido: model.apellido,
            email: model.email,
            create_at: model.create_at,
        }
    }
}
