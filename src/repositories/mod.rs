//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//!
//! - [`users::UserRepository`] - MongoDB `users` 컬렉션, [`CredentialStore`] 구현
//! - [`sessions::SessionRepository`] - Redis 세션 레코드, [`SessionCache`] 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod stores;
pub mod users;
pub mod sessions;

pub use stores::{session_key, CredentialStore, SessionCache};
