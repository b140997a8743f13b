//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 데이터 구조입니다.

pub mod users;

pub use users::*;
