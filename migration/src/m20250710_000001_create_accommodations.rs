use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodation::Table)
                    .if_not_exists()
                    .col(pk_auto(Accommodation::Id))
                    .col(string_len(Accommodation::Name, 120).not_null())
                    .col(string_len(Accommodation::Region, 16).not_null())
                    .col(string_len(Accommodation::Location, 120).not_null())
                    .col(string_len_null(Accommodation::Kind, 40))
                    .col(integer_null(Accommodation::Rating))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accommodation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Accommodation {
    Table,
    Id,
    Name,
    Region,
    Location,
    Kind,
    Rating,
}
