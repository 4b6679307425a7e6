//! Request middleware.
//!
//! `auth` holds the bearer-token guard applied to every route outside the public
//! authentication and documentation paths.

pub mod auth;

#[cfg(test)]
mod test;
