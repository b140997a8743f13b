//! # Route Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트를 한 곳에서 등록합니다.
//!
//! ```text
//! GET  /health
//! POST /api/auth/signup
//! POST /api/auth/login
//! POST /api/auth/logout
//! POST /api/auth/refresh
//! GET  /api/auth/profile   (AuthMiddleware)
//! ```

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(session_service))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// `profile`을 제외한 모든 인증 라우트는 Public 접근이 가능합니다.
///
/// ```bash
/// # 회원가입 (쿠키 저장)
/// curl -c cookies.txt -X POST http://localhost:8080/api/auth/signup \
///   -H "Content-Type: application/json" \
///   -d '{"email":"alice@example.com","password":"secret123","name":"Alice"}'
///
/// # 프로필 조회 (쿠키 전송)
/// curl -b cookies.txt http://localhost:8080/api/auth/profile
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(handlers::auth::signup)
            .service(handlers::auth::login)
            .service(handlers::auth::logout)
            .service(handlers::auth::refresh)
            .service(handlers::auth::profile),
    );
}

/// 잘못된 JSON 본문도 `{"message": ...}` 형식의 400으로 응답합니다.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "session_auth_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "session_cache": "Redis",
            "tokens": "JWT (HS256)"
        }
    }))
}
