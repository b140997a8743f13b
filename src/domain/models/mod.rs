//! # Domain Models
//!
//! 영속되지 않는 값 객체들입니다.
//!
//! - [`token`] - JWT 클레임, 토큰 종류, 토큰 쌍
//! - [`auth`] - 미들웨어가 요청 컨텍스트에 부착하는 인증된 사용자

pub mod auth;
pub mod token;
