//! # Core Framework Module
//!
//! 싱글톤 컴포넌트 관리를 위한 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입별 싱글톤 인스턴스 보관 및 조회
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 등록
//! - **의존성 해결**: `Arc<T>` 필드 자동 주입 (`singleton_macro`)
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use singleton_macro::repository;
//! use crate::core::registry::Repository;
//!
//! #[repository(name = "session", collection = "sessions")]
//! pub struct SessionRepository {
//!     redis: Arc<RedisClient>,   // ServiceLocator에서 자동 주입
//! }
//!
//! let sessions = SessionRepository::instance();
//! ```

pub mod registry;
