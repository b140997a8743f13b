//! HTTP 미들웨어
//!
//! - [`AuthMiddleware`] - 액세스 토큰(쿠키 또는 Bearer 헤더) 검증

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
