//! # Domain Entities
//!
//! MongoDB에 영속되는 핵심 도메인 엔티티입니다.
//!
//! - [`users`] - 사용자 엔티티 (`users` 컬렉션)
//!
//! 엔티티는 저장소 계층 안에서만 온전한 형태로 다뤄지며,
//! HTTP 경계로는 `dto` 모듈의 응답 타입으로 변환되어 나갑니다.

pub mod users;
