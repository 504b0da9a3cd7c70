use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Maintenance::Table)
                    .if_not_exists()
                    .col(string(Maintenance::Id).primary_key())
                    .col(string(Maintenance::Plate))
                    .col(text(Maintenance::Problems))
                    .col(
                        timestamp_with_time_zone(Maintenance::Date)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Maintenance::Status).default("Open"))
                    .to_owned(),
            )
            .await?;

        // Listing filters by status and sorts newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_maintenance_status_date")
                    .table(Maintenance::Table)
                    .col(Maintenance::Status)
                    .col(Maintenance::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Maintenance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Maintenance {
    Table,
    Id,
    Plate,
    Problems,
    Date,
    Status,
}
