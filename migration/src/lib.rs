pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_conference_table;
mod m20260105_000002_create_edition_table;
mod m20260105_000003_create_researcher_table;
mod m20260105_000004_create_article_table;
mod m20260105_000005_create_author_table;
mod m20260105_000006_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_conference_table::Migration),
            Box::new(m20260105_000002_create_edition_table::Migration),
            Box::new(m20260105_000003_create_researcher_table::Migration),
            Box::new(m20260105_000004_create_article_table::Migration),
            Box::new(m20260105_000005_create_author_table::Migration),
            Box::new(m20260105_000006_create_user_table::Migration),
        ]
    }
}
