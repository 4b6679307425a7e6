use std::{fmt::Display, ops::RangeInclusive, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRATION_SECS: i64 = 86_400;
/// One year.
const MAX_JWT_EXPIRATION_SECS: i64 = 31_536_000;
/// Range accepted by `bcrypt::hash`.
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_expiration_secs: i64,

    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_secs: from_env_in(
                "JWT_EXPIRATION_SECS",
                DEFAULT_JWT_EXPIRATION_SECS,
                1..=MAX_JWT_EXPIRATION_SECS,
            )?,
            bcrypt_cost: from_env_in(
                "BCRYPT_COST",
                bcrypt::DEFAULT_COST,
                MIN_BCRYPT_COST..=MAX_BCRYPT_COST,
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn from_env_in<T>(name: &str, default: T, range: RangeInclusive<T>) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Display,
{
    parse_in(name, std::env::var(name).ok(), default, range)
}

/// Parses `raw`, falling back to `default` when unset, and rejects values outside `range`.
fn parse_in<T>(
    name: &str,
    raw: Option<String>,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Display,
{
    let invalid = |value: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    };

    let value = match raw {
        Some(raw) => raw.parse().map_err(|_| invalid(raw))?,
        None => default,
    };

    if range.contains(&value) {
        Ok(value)
    } else {
        Err(invalid(value.to_string()))
    }
}
