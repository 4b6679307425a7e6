use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{extract_bearer_token, is_public_path, AuthGuard},
    model::user::{Role, User},
    service::auth::token::{Claims, JwtConfig, JwtManager},
};
use test_utils::{builder::TestBuilder, factory};

fn jwt() -> JwtManager {
    JwtManager::new(JwtConfig::new("middleware-test-secret")).unwrap()
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Tests a valid token for an existing user.
///
/// Verifies that the guard resolves the token subject from the database.
///
/// Expected: Ok(AuthenticatedUser) carrying the stored role
#[tokio::test]
async fn authenticates_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::user::UserFactory::new(db)
        .email("admin@example.com")
        .role("ADMIN")
        .build()
        .await?;
    let user = User::from_entity(user)?;
    let token = jwt.issue_for(&user)?;

    let guard = AuthGuard::new(db, &jwt);
    let authenticated = guard.authenticate(&bearer(&token)).await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.email, "admin@example.com");
    assert_eq!(authenticated.role, Role::Admin);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let result = AuthGuard::new(db, &jwt).authenticate(&HeaderMap::new()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?)?;
    let foreign = JwtManager::new(JwtConfig::new("some-other-secret"))?.issue_for(&user)?;

    let jwt = jwt();
    let result = AuthGuard::new(db, &jwt).authenticate(&bearer(&foreign)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a well-signed token whose subject was never stored.
///
/// Expected: Err(AuthError::UnknownSubject)
#[tokio::test]
async fn rejects_unknown_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let ghost = User {
        id: 99,
        email: "ghost@example.com".to_string(),
        password_hash: String::new(),
        role: Role::User,
    };
    let token = jwt.create_token(&Claims::for_user(&ghost, jwt.issuer(), 300))?;

    let result = AuthGuard::new(db, &jwt).authenticate(&bearer(&token)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownSubject(ref email))) if email == "ghost@example.com"
    ));

    Ok(())
}

#[test]
fn extracts_bearer_token_only() {
    let mut headers = HeaderMap::new();
    assert!(extract_bearer_token(&headers).is_none());

    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    assert!(extract_bearer_token(&headers).is_none());

    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
    assert!(extract_bearer_token(&headers).is_none());

    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
    assert_eq!(extract_bearer_token(&headers), Some("abc.def"));
}

#[test]
fn only_auth_and_docs_paths_are_public() {
    assert!(is_public_path("/api/auth/login"));
    assert!(is_public_path("/api/auth/register"));
    assert!(is_public_path("/swagger-ui/index.html"));
    assert!(is_public_path("/api-docs/openapi.json"));
    assert!(!is_public_path("/api/conference/getAll"));
    assert!(!is_public_path("/api/authors"));
}
