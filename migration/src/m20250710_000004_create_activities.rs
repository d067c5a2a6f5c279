use sea_orm_migration::{prelude::*, schema::*};

use super::m20250710_000003_create_days::Day;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_auto(Activity::Id))
                    .col(integer(Activity::DayId).not_null())
                    .col(string_len(Activity::Name, 120).not_null())
                    .col(text_null(Activity::Description))
                    .col(string_len_null(Activity::Location, 120))
                    .col(integer_null(Activity::DurationHours))
                    .col(string_len_null(Activity::Kind, 40))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_day")
                            .from(Activity::Table, Activity::DayId)
                            .to(Day::Table, Day::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    Table,
    Id,
    DayId,
    Name,
    Description,
    Location,
    DurationHours,
    Kind,
}
