use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Itinerary::Table)
                    .if_not_exists()
                    .col(pk_auto(Itinerary::Id))
                    .col(string_len(Itinerary::Name, 120).not_null())
                    .col(string_len(Itinerary::Region, 16).not_null())
                    .col(integer(Itinerary::DurationNights).not_null())
                    .col(
                        timestamp_with_time_zone(Itinerary::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Itinerary::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Itinerary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Itinerary {
    Table,
    Id,
    Name,
    Region,
    DurationNights,
    CreatedAt,
    UpdatedAt,
}
