use std::sync::OnceLock;

use bcrypt::BcryptError;

use crate::server::error::auth::AuthError;

/// Salted one-way password hashing with bcrypt.
///
/// Every call runs on the blocking thread pool so a slow hash never stalls the
/// async workers serving other requests.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let cost = self.cost;
        let password = password.to_owned();

        run_blocking(move || bcrypt::hash(password, cost)).await
    }

    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        run_blocking(move || bcrypt::verify(password, &hash)).await
    }

    /// Runs a verification against a throwaway hash.
    ///
    /// Used when the email is unknown so the response time matches a real mismatch.
    pub async fn verify_dummy(&self, password: &str) -> Result<(), AuthError> {
        let cost = self.cost;
        let password = password.to_owned();

        run_blocking(move || {
            bcrypt::verify(password, dummy_hash(cost)?)?;
            Ok(())
        })
        .await
    }
}

fn dummy_hash(cost: u32) -> Result<&'static str, BcryptError> {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();

    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash);
    }
    let hash = bcrypt::hash("dummy-password", cost)?;

    Ok(DUMMY_HASH.get_or_init(|| hash))
}

async fn run_blocking<T, F>(work: F) -> Result<T, AuthError>
where
    F: FnOnce() -> Result<T, BcryptError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(work).await??)
}
