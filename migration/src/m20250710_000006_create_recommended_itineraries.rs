use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecommendedItinerary::Table)
                    .if_not_exists()
                    .col(pk_auto(RecommendedItinerary::Id))
                    .col(string_len(RecommendedItinerary::Name, 120).not_null())
                    .col(string_len(RecommendedItinerary::Region, 16).not_null())
                    .col(integer(RecommendedItinerary::DurationNights).not_null())
                    .col(json(RecommendedItinerary::Plan).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecommendedItinerary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecommendedItinerary {
    Table,
    Id,
    Name,
    Region,
    DurationNights,
    Plan,
}
