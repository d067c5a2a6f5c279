use sea_orm_migration::{prelude::*, schema::*};

use super::m20250710_000001_create_accommodations::Accommodation;
use super::m20250710_000002_create_itineraries::Itinerary;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Day::Table)
                    .if_not_exists()
                    .col(pk_auto(Day::Id))
                    .col(integer(Day::ItineraryId).not_null())
                    .col(integer(Day::DayNumber).not_null())
                    .col(text_null(Day::DaySummary))
                    .col(integer_null(Day::AccommodationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_day_itinerary")
                            .from(Day::Table, Day::ItineraryId)
                            .to(Itinerary::Table, Itinerary::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_day_accommodation")
                            .from(Day::Table, Day::AccommodationId)
                            .to(Accommodation::Table, Accommodation::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Day::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Day {
    Table,
    Id,
    ItineraryId,
    DayNumber,
    DaySummary,
    AccommodationId,
}
