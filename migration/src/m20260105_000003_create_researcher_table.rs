use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Researcher::Table)
                    .if_not_exists()
                    .col(pk_auto(Researcher::Id))
                    .col(string_len(Researcher::Name, 64))
                    .col(string_len(Researcher::Surname, 64))
                    .col(string_len(Researcher::SecondSurname, 64))
                    .col(string_len(Researcher::University, 128))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Researcher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Researcher {
    Table,
    Id,
    Name,
    Surname,
    SecondSurname,
    University,
}
