//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문과 쿠키를 읽어 `SessionService`에 위임하고,
//! 결과를 JSON 응답과 `Set-Cookie` 헤더로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트, 쿠키         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   SessionService - 인증 프로토콜                  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   CredentialStore / SessionCache                ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 전달
//!
//! `SessionService`는 `web::Data`로 앱에 등록되어 핸들러 인자로 주입됩니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(session_service))
//!     .configure(configure_all_routes)
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인, 로그아웃, 토큰 갱신, 프로필
//! - **`cookies`**: `accessToken` / `refreshToken` 쿠키 정책

pub mod auth;
pub mod cookies;
