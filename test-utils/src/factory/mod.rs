//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly through SeaORM active models, bypassing the service layer.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let conference = factory::create_conference(&db).await?;
//!     let edition = factory::create_edition(&db, conference.id).await?;
//!
//!     let (conference, edition, article) =
//!         factory::helpers::create_article_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let researcher = factory::researcher::ResearcherFactory::new(&db)
//!     .name("Ada")
//!     .surname("Lovelace")
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod author;
pub mod conference;
pub mod edition;
pub mod helpers;
pub mod researcher;
pub mod user;

pub use article::create_article;
pub use author::create_author;
pub use conference::create_conference;
pub use edition::create_edition;
pub use researcher::create_researcher;
pub use user::create_user;
