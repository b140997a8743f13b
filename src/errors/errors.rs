//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 세션 인증 서비스의
//! 에러를 HTTP 응답으로 일관되게 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 검증 실패 |
//! | `ConflictError` | 400 Bad Request | 이미 가입된 이메일로 회원가입 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 리프레시 토큰 누락/불일치 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 세션 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 토큰 서명 실패 등 예상치 못한 오류 |
//!
//! 모든 에러 응답 본문은 `{"message": "..."}` 형식입니다.
//! 5xx 응답에는 내부 상세 정보를 싣지 않고 서버 로그에만 남깁니다.

use actix_web::http::StatusCode;
use thiserror::Error;

/// 5xx 응답에 공통으로 사용하는 메시지
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 세션 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (400 Bad Request)
    ///
    /// 이 API에서 중복 가입은 409가 아닌 400으로 응답합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지를 반환합니다.
    ///
    /// 4xx 에러는 원래 메시지를 그대로 전달하고,
    /// 5xx 에러는 내부 정보를 숨기고 일반 메시지로 대체합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            _ => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 여기서 상세 원인을 로그로 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류 발생: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "message": self.client_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
