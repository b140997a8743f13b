//! 공통 유틸리티 함수 모듈
//!
//! - [`fingerprint`] - 로그에 토큰 대신 남기는 짧은 해시 지문

pub mod fingerprint;

pub use fingerprint::fingerprint;
