//! # Authentication Configuration Module
//!
//! 액세스/리프레시 토큰 서명 비밀키, 토큰 수명, 쿠키 보안 정책을 관리합니다.
//!
//! 다른 설정 구조체(`ServerConfig`, `StorageConfig`)가 호출 시점마다 환경 변수를
//! 읽는 것과 달리, 인증 설정은 애플리케이션 시작 시 한 번 [`AuthConfig::from_env`]로
//! 읽어 불변 구조체로 만든 뒤 `SessionService` 생성 시 주입합니다.
//! 요청 처리 중에는 전역 상태를 다시 읽지 않습니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="access-token-signing-secret"
//! export REFRESH_TOKEN_SECRET="a-different-refresh-token-secret"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export ACCESS_TOKEN_TTL_MINUTES="15"   # 기본 15분
//! export REFRESH_TOKEN_TTL_DAYS="7"      # 기본 7일
//! export ENVIRONMENT="production"        # production이면 Secure 쿠키
//! ```
//!
//! ## 보안 요구사항
//!
//! 두 비밀키는 서로 달라야 합니다. 같은 키를 쓰면 액세스 토큰을 리프레시 토큰으로
//! 제시하는 식의 토큰 종류 혼동이 가능해지므로 설정 로딩 단계에서 거부합니다.

use std::env;

use chrono::Duration;
use thiserror::Error;

use crate::config::Environment;

/// 액세스 토큰 기본 수명 (분)
pub const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 15;

/// 리프레시 토큰 기본 수명 (일)
pub const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// 설정 로딩 에러
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("{0} must be set")]
    Missing(&'static str),

    /// 값 형식 오류
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },

    /// 액세스/리프레시 비밀키가 동일함
    #[error("ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET must differ")]
    SharedSecret,
}

/// 세션 인증 설정
///
/// 토큰 코덱과 세션 매니저가 공유하는 불변 설정값입니다.
#[derive(Clone)]
pub struct AuthConfig {
    access_secret: String,
    refresh_secret: String,
    /// 액세스 토큰 수명
    pub access_ttl: Duration,
    /// 리프레시 토큰 및 세션 레코드 수명
    pub refresh_ttl: Duration,
    /// 실행 환경 (쿠키 `Secure` 여부 결정)
    pub environment: Environment,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_secret", &"***")
            .field("refresh_secret", &"***")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .field("environment", &self.environment)
            .finish()
    }
}

impl AuthConfig {
    /// 명시적인 값으로 설정을 생성합니다.
    ///
    /// 토큰 수명은 기본값(15분 / 7일)을 사용합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 비밀키가 비어 있음
    /// * `ConfigError::SharedSecret` - 두 비밀키가 동일함
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let access_secret = access_secret.into();
        let refresh_secret = refresh_secret.into();

        if access_secret.is_empty() {
            return Err(ConfigError::Missing("ACCESS_TOKEN_SECRET"));
        }
        if refresh_secret.is_empty() {
            return Err(ConfigError::Missing("REFRESH_TOKEN_SECRET"));
        }
        if access_secret == refresh_secret {
            return Err(ConfigError::SharedSecret);
        }

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl: Duration::minutes(DEFAULT_ACCESS_TOKEN_TTL_MINUTES),
            refresh_ttl: Duration::days(DEFAULT_REFRESH_TOKEN_TTL_DAYS),
            environment,
        })
    }

    /// 환경 변수에서 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// 비밀키 누락/동일, 수명 값이 양의 정수가 아닌 경우 `ConfigError`를 반환합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_secret = env::var("ACCESS_TOKEN_SECRET")
            .map_err(|_| ConfigError::Missing("ACCESS_TOKEN_SECRET"))?;
        let refresh_secret = env::var("REFRESH_TOKEN_SECRET")
            .map_err(|_| ConfigError::Missing("REFRESH_TOKEN_SECRET"))?;

        let access_minutes = read_positive(
            "ACCESS_TOKEN_TTL_MINUTES",
            DEFAULT_ACCESS_TOKEN_TTL_MINUTES,
        )?;
        let refresh_days = read_positive(
            "REFRESH_TOKEN_TTL_DAYS",
            DEFAULT_REFRESH_TOKEN_TTL_DAYS,
        )?;

        let config = Self::new(access_secret, refresh_secret, Environment::current())?
            .with_lifetimes(Duration::minutes(access_minutes), Duration::days(refresh_days));

        log::info!("인증 설정 로드됨: {:?}", config);
        Ok(config)
    }

    /// 토큰 수명을 바꾼 설정을 반환합니다.
    pub fn with_lifetimes(mut self, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        self.access_ttl = access_ttl;
        self.refresh_ttl = refresh_ttl;
        self
    }

    /// 액세스 토큰 서명 비밀키
    pub fn access_secret(&self) -> &str {
        &self.access_secret
    }

    /// 리프레시 토큰 서명 비밀키
    pub fn refresh_secret(&self) -> &str {
        &self.refresh_secret
    }

    /// 세션 레코드 TTL (초)
    pub fn refresh_ttl_seconds(&self) -> u64 {
        self.refresh_ttl.num_seconds().max(0) as u64
    }

    /// 쿠키에 `Secure` 속성을 붙일지 여부
    pub fn secure_cookies(&self) -> bool {
        self.environment.is_production()
    }
}

fn read_positive(name: &'static str, default: i64) -> Result<i64, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => {
            let value = raw.trim().parse::<i64>().map_err(|e| ConfigError::Invalid {
                name,
                reason: e.to_string(),
            })?;
            if value <= 0 {
                return Err(ConfigError::Invalid {
                    name,
                    reason: "must be positive".to_string(),
                });
            }
            Ok(value)
        }
    }
}
