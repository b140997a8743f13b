//! `SessionService` 단위 흐름 테스트 (HTTP 계층 없이)

mod common;

use std::sync::atomic::Ordering;

use chrono::{Duration, Utc};

use common::{auth_config, harness, harness_with};
use session_auth_backend::config::Environment;
use session_auth_backend::domain::dto::users::request::{LoginRequest, SignupRequest};
use session_auth_backend::domain::models::auth::AuthenticatedUser;
use session_auth_backend::domain::models::token::token::TokenKind;
use session_auth_backend::errors::AppError;
use session_auth_backend::repositories::stores::session_key;
use session_auth_backend::services::auth::{TokenError, TokenService};

fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        password: "secret123".to_string(),
        name: "Alice".to_string(),
    }
}

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[actix_web::test]
async fn test_signup_issues_tokens_for_created_user() {
    let h = harness();

    let session = h.service.signup(signup_request("alice@example.com")).await.unwrap();

    let claims = h
        .service
        .tokens()
        .verify(TokenKind::Refresh, &session.tokens.refresh_token)
        .unwrap();
    assert_eq!(claims.sub, session.user.id);

    let access = h
        .service
        .tokens()
        .verify(TokenKind::Access, &session.tokens.access_token)
        .unwrap();
    assert_eq!(access.sub, session.user.id);
    assert_eq!(
        h.sessions.value(&session_key(&session.user.id)).as_deref(),
        Some(session.tokens.refresh_token.as_str())
    );
}

#[actix_web::test]
async fn test_signup_conflict_leaves_session_untouched() {
    let h = harness();
    h.service.signup(signup_request("bob@example.com")).await.unwrap();
    let puts = h.sessions.puts.load(Ordering::SeqCst);

    let err = h.service.signup(signup_request("bob@example.com")).await.unwrap_err();

    assert!(matches!(err, AppError::ConflictError(ref message) if message == "User already exists"));
    assert_eq!(h.sessions.puts.load(Ordering::SeqCst), puts);
}

#[actix_web::test]
async fn test_signup_validation_error() {
    let h = harness();

    let err = h
        .service
        .signup(SignupRequest {
            email: "carol@example.com".to_string(),
            password: "123".to_string(),
            name: "Carol".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(h.users.count(), 0);
}

#[actix_web::test]
async fn test_login_is_case_insensitive_on_email() {
    let h = harness();
    h.service.signup(signup_request("dana@example.com")).await.unwrap();

    let session = h
        .service
        .login(login_request("  DANA@example.com ", "secret123"))
        .await
        .unwrap();

    assert_eq!(session.user.email, "dana@example.com");
}

#[actix_web::test]
async fn test_login_overwrites_session_record() {
    let h = harness();
    let signup = h.service.signup(signup_request("eve@example.com")).await.unwrap();
    let key = session_key(&signup.user.id);

    let first = h.service.login(login_request("eve@example.com", "secret123")).await.unwrap();
    let second = h.service.login(login_request("eve@example.com", "secret123")).await.unwrap();

    assert_ne!(first.tokens.refresh_token, second.tokens.refresh_token);
    assert_eq!(h.sessions.value(&key).as_deref(), Some(second.tokens.refresh_token.as_str()));
    assert_eq!(h.sessions.len(), 1);

    let stale = h.service.refresh(Some(&first.tokens.refresh_token)).await.unwrap_err();
    assert!(matches!(stale, AppError::AuthenticationError(ref m) if m == "Invalid refresh token"));
    assert!(h.service.refresh(Some(&second.tokens.refresh_token)).await.is_ok());
}

#[actix_web::test]
async fn test_refresh_does_not_rotate_refresh_token() {
    let h = harness();
    let session = h.service.signup(signup_request("finn@example.com")).await.unwrap();
    let puts = h.sessions.puts.load(Ordering::SeqCst);

    let access = h.service.refresh(Some(&session.tokens.refresh_token)).await.unwrap();
    let again = h.service.refresh(Some(&session.tokens.refresh_token)).await;

    assert!(again.is_ok());
    assert_eq!(h.sessions.puts.load(Ordering::SeqCst), puts);
    let claims = h.service.tokens().verify(TokenKind::Access, &access).unwrap();
    assert_eq!(claims.sub, session.user.id);
}

#[actix_web::test]
async fn test_refresh_without_token_never_contacts_cache() {
    let h = harness();

    for missing in [None, Some("")] {
        let err = h.service.refresh(missing).await.unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(ref m) if m == "No refresh token provided"));
    }

    assert_eq!(h.sessions.total_calls(), 0);
}

#[actix_web::test]
async fn test_refresh_after_session_expiry_is_rejected() {
    let h = harness();
    let session = h.service.signup(signup_request("gwen@example.com")).await.unwrap();

    h.sessions.expire(&session_key(&session.user.id));

    let err = h.service.refresh(Some(&session.tokens.refresh_token)).await.unwrap_err();
    assert!(matches!(err, AppError::AuthenticationError(_)));
}

#[actix_web::test]
async fn test_refresh_with_expired_token_is_rejected() {
    let config = auth_config(Environment::Test);
    let h = harness_with(config.clone());
    let session = h.service.signup(signup_request("hugo@example.com")).await.unwrap();

    // 같은 비밀키로 8일 전에 발급된 리프레시 토큰
    let codec = TokenService::new(&config);
    let expired = codec
        .mint_at(TokenKind::Refresh, &session.user.id, Utc::now() - Duration::days(8))
        .unwrap();
    assert_eq!(codec.verify(TokenKind::Refresh, &expired), Err(TokenError::Expired));

    let err = h.service.refresh(Some(&expired)).await.unwrap_err();
    assert!(matches!(err, AppError::AuthenticationError(ref m) if m == "Invalid refresh token"));
}

#[actix_web::test]
async fn test_refresh_cache_failure_is_internal() {
    let h = harness();
    let session = h.service.signup(signup_request("iris@example.com")).await.unwrap();
    h.sessions.set_failing(true);

    let err = h.service.refresh(Some(&session.tokens.refresh_token)).await.unwrap_err();
    assert!(matches!(err, AppError::RedisError(_)));
}

#[actix_web::test]
async fn test_logout_revokes_and_is_idempotent() {
    let h = harness();
    let session = h.service.signup(signup_request("jane@example.com")).await.unwrap();

    h.service.logout(Some(&session.tokens.refresh_token)).await.unwrap();
    h.service.logout(Some(&session.tokens.refresh_token)).await.unwrap();
    h.service.logout(None).await.unwrap();
    h.service.logout(Some("garbage")).await.unwrap();

    assert_eq!(h.sessions.len(), 0);
    assert_eq!(h.sessions.deletes.load(Ordering::SeqCst), 2);
    assert!(h.service.refresh(Some(&session.tokens.refresh_token)).await.is_err());
}

#[actix_web::test]
async fn test_logout_with_superseded_token_ends_current_session() {
    let h = harness();
    let first = h.service.signup(signup_request("max@example.com")).await.unwrap();
    let second = h.service.login(login_request("max@example.com", "secret123")).await.unwrap();

    h.service.logout(Some(&first.tokens.refresh_token)).await.unwrap();

    let key = session_key(&second.user.id);
    assert_eq!(h.sessions.value(&key), None);
    assert!(h.service.refresh(Some(&second.tokens.refresh_token)).await.is_err());
}

#[actix_web::test]
async fn test_logout_store_failure_is_reported() {
    let h = harness();
    let session = h.service.signup(signup_request("kai@example.com")).await.unwrap();
    h.sessions.set_failing(true);

    let err = h.service.logout(Some(&session.tokens.refresh_token)).await.unwrap_err();
    assert!(matches!(err, AppError::RedisError(_)));
}

#[actix_web::test]
async fn test_authenticate_and_profile() {
    let h = harness();
    let session = h.service.signup(signup_request("lena@example.com")).await.unwrap();

    let user = h.service.authenticate(&session.tokens.access_token).await.unwrap();
    assert_eq!(user, session.user);
    assert_eq!(h.service.profile(AuthenticatedUser(user.clone())), user);

    let err = h.service.authenticate(&session.tokens.refresh_token).await.unwrap_err();
    assert!(matches!(err, AppError::AuthenticationError(_)));
}
