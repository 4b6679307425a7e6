use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_researcher_table::Researcher,
    m20260105_000004_create_article_table::Article,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(pk_auto(Author::Id))
                    .col(integer(Author::ArticleId))
                    .col(integer(Author::ResearcherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_author_article_id")
                            .from(Author::Table, Author::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_author_researcher_id")
                            .from(Author::Table, Author::ResearcherId)
                            .to(Researcher::Table, Researcher::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_author_researcher_id")
                    .table(Author::Table)
                    .col(Author::ResearcherId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Author {
    Table,
    Id,
    ArticleId,
    ResearcherId,
}
