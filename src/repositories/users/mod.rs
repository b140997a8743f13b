//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 MongoDB 기반 사용자 데이터를 관리합니다.
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리됩니다.

pub mod user_repo;

pub use user_repo::UserRepository;
