//! Migration: Create clientes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clientes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clientes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clientes::Nombre).string().not_null())
                    .col(ColumnDef::new(Clientes::Apellido).string().null())
                    .col(ColumnDef::new(Clientes::Email).string().null().unique_key())
                    .col(
                        ColumnDef::new(Clientes::CreateAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clientes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Clientes {
    Table,
    Id,
    Nombre,
    Apellido,
    Email,
    CreateAt,
}
