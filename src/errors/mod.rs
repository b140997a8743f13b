//! 에러 처리 모듈
//!
//! [`errors::AppError`]와 HTTP 응답 변환을 제공합니다.

pub mod errors;

pub use errors::*;
