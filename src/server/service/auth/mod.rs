//! Registration and login for credential-based users.
//!
//! Passwords are stored as bcrypt hashes and successful calls return a signed bearer
//! token whose subject is the user's email.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError, ErrorContext},
    model::user::{LoginParam, RegisterUserParam, Role},
};

pub mod password;
pub mod token;

use self::{password::PasswordHasher, token::JwtManager};

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub jwt: &'a JwtManager,
    pub password_hasher: &'a PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        jwt: &'a JwtManager,
        password_hasher: &'a PasswordHasher,
    ) -> Self {
        Self {
            db,
            jwt,
            password_hasher,
        }
    }

    /// Registers a new user with the `USER` role and issues their first token.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed bearer token for the new user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::AuthErr)` - Hashing or signing failed
    pub async fn register(&self, param: RegisterUserParam) -> Result<String, AppError> {
        let repo = UserRepository::new(self.db);

        if repo
            .email_exists(&param.email)
            .await
            .during("registering user")?
        {
            return Err(AppError::BadRequest(format!(
                "Email {} is already registered",
                param.email
            )));
        }

        let password_hash = self.password_hasher.hash(&param.password).await?;
        let user = repo
            .create(param.email, password_hash, Role::User)
            .await
            .during("registering user")?;

        tracing::info!("Registered user {} with role {}", user.email, user.role);

        Ok(self.jwt.issue_for(&user)?)
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown emails still run a bcrypt verification so both failure cases take
    /// comparable time and return the same error.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed bearer token
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, param: LoginParam) -> Result<String, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&param.email)
            .await
            .during("logging in")?;

        let Some(user) = user else {
            self.password_hasher.verify_dummy(&param.password).await?;
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self
            .password_hasher
            .verify(&param.password, &user.password_hash)
            .await?
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.jwt.issue_for(&user)?)
    }
}
