//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Param types are built from request
//! DTOs through `from_dto`, which validates every field before any mutation happens.

pub mod article;
pub mod author;
pub mod conference;
pub mod edition;
pub mod page;
pub mod researcher;
pub mod user;
