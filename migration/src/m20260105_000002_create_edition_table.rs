use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_conference_table::Conference;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Edition::Table)
                    .if_not_exists()
                    .col(pk_auto(Edition::Id))
                    .col(integer(Edition::ConferenceId))
                    .col(integer(Edition::Year))
                    .col(date(Edition::Date))
                    .col(string_len(Edition::City, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_edition_conference_id")
                            .from(Edition::Table, Edition::ConferenceId)
                            .to(Conference::Table, Conference::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_edition_conference_id")
                    .table(Edition::Table)
                    .col(Edition::ConferenceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Edition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Edition {
    Table,
    Id,
    ConferenceId,
    Year,
    Date,
    City,
}
