use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Motorcycle::Table)
                    .if_not_exists()
                    .col(pk_auto(Motorcycle::Id))
                    .col(string_uniq(Motorcycle::Plate))
                    .col(integer(Motorcycle::Year))
                    .col(string(Motorcycle::Model))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Motorcycle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Motorcycle {
    Table,
    Id,
    Plate,
    Year,
    Model,
}
