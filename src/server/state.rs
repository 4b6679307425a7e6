//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through
//! Axum's state extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `JwtManager` keeps its keys behind `Arc`
//! - `PasswordHasher` is a plain cost value

use sea_orm::DatabaseConnection;

use crate::server::service::auth::{password::PasswordHasher, token::JwtManager};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite catalog database.
    pub db: DatabaseConnection,

    /// Issues and validates bearer tokens.
    pub jwt: JwtManager,

    /// Hashes and verifies user passwords.
    pub password_hasher: PasswordHasher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtManager, password_hasher: PasswordHasher) -> Self {
        Self {
            db,
            jwt,
            password_hasher,
        }
    }
}
