//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 세션 매니저는 설정과 저장소 트레이트를 생성자로 주입받습니다.
//! 저장소 구현은 `#[repository]` 싱글톤(운영) 또는 인메모리 구현(테스트)입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::SessionService;
//! use crate::repositories::{sessions::SessionRepository, users::UserRepository};
//!
//! let service = SessionService::new(
//!     AuthConfig::from_env()?,
//!     UserRepository::instance(),
//!     SessionRepository::instance(),
//! );
//! ```

pub mod auth;
