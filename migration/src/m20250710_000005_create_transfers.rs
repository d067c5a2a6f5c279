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
                    .table(Transfer::Table)
                    .if_not_exists()
                    .col(pk_auto(Transfer::Id))
                    .col(integer(Transfer::DayId).not_null())
                    .col(string_len(Transfer::Description, 160).not_null())
                    .col(string_len_null(Transfer::FromLocation, 120))
                    .col(string_len_null(Transfer::ToLocation, 120))
                    .col(string_len_null(Transfer::Method, 60))
                    .col(integer_null(Transfer::DurationMinutes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfer_day")
                            .from(Transfer::Table, Transfer::DayId)
                            .to(Day::Table, Day::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transfer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transfer {
    Table,
    Id,
    DayId,
    Description,
    FromLocation,
    ToLocation,
    Method,
    DurationMinutes,
}
