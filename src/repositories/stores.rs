//! 세션 매니저가 의존하는 저장소 추상화
//!
//! `SessionService`는 구체 리포지토리 대신 이 트레이트들에 의존합니다.
//! 운영 환경에서는 `UserRepository`(MongoDB)와 `SessionRepository`(Redis)가,
//! 테스트에서는 인메모리 구현이 주입됩니다.

use async_trait::async_trait;

use crate::domain::entities::users::user::{NewUser, User};
use crate::errors::AppResult;

/// 사용자 자격 증명 저장소
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 이메일로 사용자를 조회합니다. 이메일은 정규화 후 비교합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID(ObjectId 16진 문자열)로 사용자를 조회합니다.
    ///
    /// 형식이 잘못된 ID는 에러가 아니라 `None`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장합니다. 비밀번호 해싱은 구현체가 담당합니다.
    ///
    /// 이메일이 이미 존재하면 `AppError::ConflictError`를 반환합니다.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// 평문 비밀번호가 사용자의 저장된 해시와 일치하는지 확인합니다.
    async fn verify_password(&self, user: &User, candidate: &str) -> AppResult<bool>;
}

/// 세션 레코드(리프레시 토큰) 키-값 캐시
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// 값을 TTL(초)과 함께 저장합니다. 기존 값은 덮어씁니다.
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> AppResult<()>;

    /// 값을 조회합니다. 없거나 만료되었으면 `None`.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// 값을 삭제합니다. 키가 없어도 성공입니다.
    async fn delete(&self, key: &str) -> AppResult<()>;
}

/// 사용자 ID에 대한 세션 레코드 키
pub fn session_key(user_id: &str) -> String {
    format!("refresh_token:{}", user_id)
}
