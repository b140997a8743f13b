//! 세션 인증 서비스 백엔드
//!
//! 쿠키 기반 세션 인증 서비스입니다. 회원가입, 로그인, 로그아웃, 토큰 갱신,
//! 프로필 조회 엔드포인트를 제공합니다.
//!
//! # Features
//!
//! - **JWT 토큰**: HS256 액세스(15분)/리프레시(7일) 토큰, 서로 다른 비밀키
//! - **HttpOnly 쿠키**: 토큰은 `accessToken` / `refreshToken` 쿠키로만 전달
//! - **세션 레코드**: 사용자당 하나의 리프레시 토큰을 Redis에 저장, 로그아웃 시 삭제
//! - **MongoDB**: 사용자 데이터 영구 저장 (bcrypt 해시)
//! - **싱글톤 DI**: 매크로 기반 리포지토리 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/auth/*, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답, 쿠키 정책, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SessionService  │ ← 인증 프로토콜, TokenService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← CredentialStore / SessionCache
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use session_auth_backend::services::auth::SessionService;
//! use session_auth_backend::repositories::{sessions::SessionRepository, users::UserRepository};
//!
//! let service = SessionService::new(
//!     AuthConfig::from_env()?,
//!     UserRepository::instance(),
//!     SessionRepository::instance(),
//! );
//! let session = service.login(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
