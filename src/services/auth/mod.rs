//! 인증 및 세션 서비스 모듈
//!
//! # Features
//!
//! - [`TokenService`]: HS256 JWT 액세스/리프레시 토큰 발급 및 검증
//! - [`SessionService`]: 회원가입, 로그인, 토큰 갱신, 로그아웃, 요청 인증
//!
//! # Security
//!
//! - 액세스/리프레시 토큰은 서로 다른 비밀키로 서명
//! - 리프레시 토큰은 Redis에 저장된 값과 일치해야만 사용 가능
//! - 토큰 원문은 로그에 남기지 않음 (SHA-256 지문만 기록)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::SessionService;
//!
//! let service = SessionService::new(config, users, sessions);
//! let session = service.login(request).await?;
//! let access_token = service.refresh(Some(&session.tokens.refresh_token)).await?;
//! ```

pub mod token_service;
pub mod session_service;

pub use token_service::*;
pub use session_service::*;
