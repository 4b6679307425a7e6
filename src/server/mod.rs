//! HTTP backend for the conference catalog.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, extraction and DTO conversion
//! - **Service Layer** (`service/`) - Reference checks and orchestration between repositories
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, validated params and pagination
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token and hash settings)
//! - **Startup** (`startup`) - Tracing, database connection and migrations
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the request and runs the auth middleware
//! 2. **Middleware** resolves the bearer token to an `AuthenticatedUser`
//! 3. **Controller** validates the DTO into a param and calls the service
//! 4. **Service** checks referenced rows, then calls repositories
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts domain models to DTOs inside the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
