//! Authentication HTTP Handlers
//!
//! 세션 인증 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 토큰은 응답 본문에 싣지 않고 `HttpOnly` 쿠키로만 전달합니다.
//!
//! # Endpoints
//!
//! - `POST /api/auth/signup` - 회원가입 (201)
//! - `POST /api/auth/login` - 로그인
//! - `POST /api/auth/logout` - 로그아웃 (항상 쿠키 삭제)
//! - `POST /api/auth/refresh` - 액세스 토큰 재발급
//! - `GET /api/auth/profile` - 현재 사용자 정보 (인증 필요)
use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::domain::dto::users::request::{LoginRequest, SignupRequest};
use crate::domain::dto::users::response::{AuthResponse, MessageResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::handlers::cookies::{read_cookie, CookiePolicy, ACCESS_COOKIE, REFRESH_COOKIE};
use crate::middlewares::AuthMiddleware;
use crate::services::auth::{IssuedSession, SessionService};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/auth/signup`
///
/// # Request Body
/// ```json
/// { "email": "alice@example.com", "password": "secret123", "name": "Alice" }
/// ```
///
/// # Response (201)
/// ```json
/// { "user": { "id": "...", "name": "Alice", "email": "alice@example.com", "role": "user" },
///   "message": "User created successfully" }
/// ```
#[post("/signup")]
pub async fn signup(
    service: web::Data<SessionService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let session = service.signup(payload.into_inner()).await?;

    Ok(session_response(
        HttpResponse::Created(),
        &service,
        session,
        "User created successfully",
    ))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/auth/login`
///
/// 등록되지 않은 이메일과 틀린 비밀번호는 모두 401 `Invalid email or password`입니다.
#[post("/login")]
pub async fn login(
    service: web::Data<SessionService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let session = service.login(payload.into_inner()).await?;

    Ok(session_response(
        HttpResponse::Ok(),
        &service,
        session,
        "Login successful",
    ))
}

/// 로그아웃 핸들러
///
/// # Endpoint
/// `POST /api/auth/logout`
///
/// 리프레시 토큰이 없거나 유효하지 않아도 200으로 응답하고 두 쿠키를 삭제합니다.
#[post("/logout")]
pub async fn logout(
    req: HttpRequest,
    service: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = read_cookie(&req, REFRESH_COOKIE);
    service.logout(refresh_token.as_deref()).await?;

    let cookies = CookiePolicy::from_config(service.config());

    Ok(HttpResponse::Ok()
        .cookie(cookies.cleared(ACCESS_COOKIE))
        .cookie(cookies.cleared(REFRESH_COOKIE))
        .json(MessageResponse::new("Logged out successfully")))
}

/// 액세스 토큰 재발급 핸들러
///
/// # Endpoint
/// `POST /api/auth/refresh`
///
/// 새 `accessToken` 쿠키만 설정합니다. `refreshToken` 쿠키는 그대로 유지됩니다.
#[post("/refresh")]
pub async fn refresh(
    req: HttpRequest,
    service: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = read_cookie(&req, REFRESH_COOKIE);
    let access_token = service.refresh(refresh_token.as_deref()).await?;

    let cookies = CookiePolicy::from_config(service.config());

    Ok(HttpResponse::Ok()
        .cookie(cookies.access_cookie(&access_token))
        .json(MessageResponse::new("Token refreshed successfully")))
}

/// 현재 사용자 정보 핸들러
///
/// # Endpoint
/// `GET /api/auth/profile`
///
/// `AuthMiddleware`가 확인한 사용자 정보를 그대로 반환합니다.
#[get("/profile", wrap = "AuthMiddleware::required()")]
pub async fn profile(
    service: web::Data<SessionService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.profile(user)))
}

fn session_response(
    mut builder: actix_web::HttpResponseBuilder,
    service: &SessionService,
    session: IssuedSession,
    message: &str,
) -> HttpResponse {
    let cookies = CookiePolicy::from_config(service.config());

    builder
        .cookie(cookies.access_cookie(&session.tokens.access_token))
        .cookie(cookies.refresh_cookie(&session.tokens.refresh_token))
        .json(AuthResponse::new(session.user, message))
}
