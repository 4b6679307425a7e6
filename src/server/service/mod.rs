//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Validation of references**: Checking that referenced rows exist before writing
//! - **Orchestration**: Coordinating repository calls across entities
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error context**: Naming the operation a persistence failure happened in

pub mod article;
pub mod auth;
pub mod author;
pub mod conference;
pub mod edition;
pub mod researcher;
