//! Credential subjects and the params used to register and log in.

use std::{fmt, str::FromStr};

use sea_orm::DbErr;

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{error::validation::ValidationErrors, util::validate::FieldValidator},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(format!("Unknown role {:?}", value)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Converts a stored user, failing on a role name this build does not know.
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity.role.parse().map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
        })
    }
}

/// Validated registration request. The password is still plain text here.
///
/// The payload must name a known role, but registration always grants
/// [`Role::User`], so the requested value is checked and then dropped.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub password: String,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, ValidationErrors> {
        let mut v = FieldValidator::new();
        let email = v.email("email", dto.email);
        let password = v.text("password", "Password", dto.password, 8..=64);
        if let Some(role) = v.required("role", "Role", dto.role) {
            if role.parse::<Role>().is_err() {
                v.reject("role", "Role must be USER or ADMIN");
            }
        }
        v.finish()?;

        Ok(Self { email, password })
    }
}

/// Login request. Only presence is checked so wrong credentials always reach the 401 path.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Result<Self, ValidationErrors> {
        let mut v = FieldValidator::new();
        let email = v.text("email", "Email", dto.email, 1..=254);
        let password = v.text("password", "Password", dto.password, 1..=1024);
        v.finish()?;

        Ok(Self { email, password })
    }
}
