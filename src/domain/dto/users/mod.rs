//! # User DTOs
//!
//! 인증 엔드포인트의 요청/응답 계약을 정의합니다.
//!
//! ## 요청
//! - [`request::SignupRequest`] - `POST /api/auth/signup`
//! - [`request::LoginRequest`] - `POST /api/auth/login`
//!
//! ## 응답
//! - [`response::UserResponse`] - 공개 사용자 정보 `{id, name, email, role}`
//! - [`response::AuthResponse`] - `{user, message}`
//! - [`response::MessageResponse`] - `{message}`
//!
//! 비밀번호 해시나 내부 필드는 응답 DTO에 포함되지 않습니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
