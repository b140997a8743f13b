//! 캐싱 계층 모듈
//!
//! Redis를 세션 캐시로 사용합니다. 리프레시 토큰 상태는
//! `refresh_token:<userId>` 키에 TTL과 함께 저장됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let redis = RedisClient::new("redis://localhost:6379").await?;
//! redis.setex("refresh_token:64f0...", &refresh_token, 604_800).await?;
//! let stored = redis.get_string("refresh_token:64f0...").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
