use std::sync::Arc;

use async_trait::async_trait;
use singleton_macro::repository;

use crate::caching::redis::RedisClient;
use crate::errors::{AppError, AppResult};
use crate::repositories::stores::SessionCache;

/// 세션 레코드 관리를 위한 Repository
///
/// Redis에 `refresh_token:<userId>` → 리프레시 토큰 문자열을 저장합니다.
/// 사용자당 최대 하나의 레코드만 존재하며, 로그인할 때마다 덮어씁니다.
/// 만료는 Redis TTL이 처리합니다.
#[repository(name = "session", collection = "sessions")]
pub struct SessionRepository {
    /// `ServiceLocator`에 등록된 Redis 클라이언트 (자동 주입)
    ///
    /// 필드명이 `redis`/`cache`가 아니므로 매크로의 패턴 캐시 헬퍼는 생성되지 않습니다.
    client: Arc<RedisClient>,
}

#[async_trait]
impl SessionCache for SessionRepository {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> AppResult<()> {
        self.client
            .setex(key, value, ttl_seconds)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.client
            .get_string(key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .del(key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
