//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! entity types out of the service and controller layers. Every method returns
//! `Result<_, DbErr>`; services decide which database failures become not-found responses.

pub mod article;
pub mod author;
pub mod conference;
pub mod edition;
pub mod researcher;
pub mod user;

#[cfg(test)]
mod test;
