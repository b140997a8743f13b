//! Users Entity Module
//!
//! 자격 증명 저장소에 저장되는 사용자 엔티티와 가입 입력 타입을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{User, Role};
//!
//! let user = User::new("Alice".to_string(), "alice@example.com", password_hash);
//! assert_eq!(user.role, Role::User);
//! ```

pub mod user;

pub use user::{normalize_email, NewUser, Role, User};
