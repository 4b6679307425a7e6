pub mod api;
pub mod article;
pub mod auth;
pub mod author;
pub mod conference;
pub mod edition;
pub mod researcher;
