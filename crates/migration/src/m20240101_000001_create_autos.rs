//! Create `autos` table.
//!
//! One row per parking allocation; `auto_id` is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Autos::Table)
                    .if_not_exists()
                    .col(pk_auto(Autos::AutoId))
                    .col(string_null(Autos::ParkingName))
                    .col(double_null(Autos::ParkingPrice))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Autos::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Autos { Table, AutoId, ParkingName, ParkingPrice }
