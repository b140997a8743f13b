//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 패스워드 해싱, 서버 바인딩, 저장소 연결 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - Secure 쿠키 사용
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Development`를 기본값으로 사용합니다.
    /// 운영 배포에서는 반드시 `ENVIRONMENT=production`을 지정해야
    /// 쿠키에 `Secure` 속성이 붙습니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 프로덕션 환경 여부
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위로 지정되어 있으면 그 값을 우선합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "0.0.0.0" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// CORS 허용 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    ///
    /// 쿠키 기반 인증이므로 와일드카드 대신 명시적 Origin만 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:3000".to_string());

        parse_origin_list(&raw)
    }
}

/// 저장소 연결 설정
pub struct StorageConfig;

impl StorageConfig {
    /// MongoDB 연결 URI
    ///
    /// `MONGO_URI`를 우선 사용하고, 없으면 `MONGODB_URI`, 둘 다 없으면 로컬 기본값을 사용합니다.
    pub fn mongo_uri() -> String {
        env::var("MONGO_URI")
            .or_else(|_| env::var("MONGODB_URI"))
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름 (`DATABASE_NAME`)
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "session_auth".to_string())
    }

    /// Redis 연결 URL (`REDIS_URL`)
    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}
