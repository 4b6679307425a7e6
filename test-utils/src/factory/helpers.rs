//! Shared helper utilities for factory methods.
//!
//! Provides ID generation for unique default values and convenience methods for
//! creating entities together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Encodes a counter value using letters only.
///
/// Researcher name parts reject digits, so factories use this to keep defaults unique.
pub fn next_letters() -> String {
    let mut n = next_id();
    let mut out = String::new();
    loop {
        out.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out
}

/// Creates a conference, one of its editions, and an article in that edition.
///
/// # Returns
/// - `Ok((conference, edition, article))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::conference::Model,
        entity::edition::Model,
        entity::article::Model,
    ),
    DbErr,
> {
    let conference = crate::factory::conference::create_conference(db).await?;
    let edition = crate::factory::edition::create_edition(db, conference.id).await?;
    let article = crate::factory::article::create_article(db, edition.id).await?;

    Ok((conference, edition, article))
}

/// Creates an article with its dependencies, a researcher, and the author row linking them.
///
/// # Returns
/// - `Ok((article, researcher, author))` - Tuple of the linked entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_authorship(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::article::Model,
        entity::researcher::Model,
        entity::author::Model,
    ),
    DbErr,
> {
    let (_, _, article) = create_article_with_dependencies(db).await?;
    let researcher = crate::factory::researcher::create_researcher(db).await?;
    let author = crate::factory::author::create_author(db, article.id, researcher.id).await?;

    Ok((article, researcher, author))
}
