use crate::server::{data::user::UserRepository, model::user::Role};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a user and finding it by email.
///
/// Expected: Ok with role and hash round-tripped
#[tokio::test]
async fn creates_and_finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("ada@example.com".to_string(), "hash".to_string(), Role::Admin)
        .await?;

    let found = repo.find_by_email("ada@example.com").await?.unwrap();

    assert_eq!(found, user);
    assert_eq!(found.role, Role::Admin);
    assert!(repo.email_exists("ada@example.com").await?);
    assert!(repo.find_by_email("bob@example.com").await?.is_none());

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(existing.email.clone(), "hash".to_string(), Role::User)
        .await;

    assert!(result.is_err());

    Ok(())
}
