//! # Domain Layer Module
//!
//! 세션 인증 서비스의 도메인 타입을 모아 둔 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 사용자 엔티티
//! ├── dto       - 요청/응답 계약
//! └── models    - 토큰 클레임, 인증 컨텍스트 등 값 객체
//! ```

pub mod entities;
pub mod dto;
pub mod models;
