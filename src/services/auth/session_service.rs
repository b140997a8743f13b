//! 세션 매니저
//!
//! 회원가입, 로그인, 토큰 갱신, 로그아웃, 프로필 조회의 인증 프로토콜을 구현합니다.
//!
//! ## 세션 모델
//!
//! ```text
//! signup/login ─┬─ access token  (15분, 쿠키 accessToken)
//!               ├─ refresh token (7일, 쿠키 refreshToken)
//!               └─ Redis: refresh_token:<userId> = refresh token (TTL 7일)
//!
//! refresh ── 쿠키의 refresh token == Redis에 저장된 값 → 새 access token
//! logout  ── Redis 레코드 삭제 (이후 같은 refresh token으로 갱신 불가)
//! ```
//!
//! 사용자당 세션 레코드는 하나뿐이므로, 두 번째 로그인은 첫 번째 로그인의
//! 리프레시 토큰을 무효화합니다.
//!
//! ## 실패 정책
//!
//! 토큰 검증 실패는 구체적인 사유(서명/만료)를 로그에만 남기고 클라이언트에는
//! 하나의 401 메시지로 응답합니다. 저장소 장애와 토큰 서명 실패는 500입니다.

use std::sync::Arc;

use log::{debug, info, warn};
use validator::{Validate, ValidationErrors};

use crate::config::AuthConfig;
use crate::domain::dto::users::request::{LoginRequest, SignupRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::token::{TokenKind, TokenPair};
use crate::errors::{AppError, AppResult};
use crate::repositories::stores::{session_key, CredentialStore, SessionCache};
use crate::services::auth::token_service::{TokenError, TokenService};
use crate::utils::fingerprint;

pub const USER_EXISTS_MESSAGE: &str = "User already exists";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const MISSING_REFRESH_TOKEN_MESSAGE: &str = "No refresh token provided";
pub const INVALID_REFRESH_TOKEN_MESSAGE: &str = "Invalid refresh token";
pub const MISSING_ACCESS_TOKEN_MESSAGE: &str = "Unauthorized - No access token provided";
pub const INVALID_ACCESS_TOKEN_MESSAGE: &str = "Unauthorized - Invalid access token";

/// 회원가입/로그인 결과
///
/// 트랜스포트 계층은 `tokens`를 쿠키로, `user`를 응답 본문으로 내보냅니다.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user: UserResponse,
    pub tokens: TokenPair,
}

/// 세션 매니저
///
/// 모든 의존성은 생성 시점에 주입되며 이후 변경되지 않습니다.
/// 요청 간 공유되는 가변 상태는 세션 캐시뿐입니다.
pub struct SessionService {
    config: AuthConfig,
    tokens: TokenService,
    users: Arc<dyn CredentialStore>,
    sessions: Arc<dyn SessionCache>,
}

impl SessionService {
    pub fn new(
        config: AuthConfig,
        users: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionCache>,
    ) -> Self {
        let tokens = TokenService::new(&config);

        Self {
            config,
            tokens,
            users,
            sessions,
        }
    }

    /// 인증 설정 (쿠키 정책 구성에 사용)
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// 토큰 코덱
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// 회원가입
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일 형식, 비밀번호 길이, 이름 누락
    /// * `AppError::ConflictError` - 이미 가입된 이메일
    pub async fn signup(&self, request: SignupRequest) -> AppResult<IssuedSession> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()));
        }

        let user = self.users.create(request.into()).await?;
        let session = self.issue(user).await?;

        info!("회원가입 완료: {} ({})", session.user.email, session.user.id);
        Ok(session)
    }

    /// 로그인
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 구별되지 않는 같은 응답을 받습니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<IssuedSession> {
        let Some(user) = self.users.find_by_email(&request.email).await? else {
            debug!("로그인 실패: 등록되지 않은 이메일");
            return Err(invalid_credentials());
        };

        if !self.users.verify_password(&user, &request.password).await? {
            debug!("로그인 실패: 비밀번호 불일치 ({})", user.email);
            return Err(invalid_credentials());
        }

        let session = self.issue(user).await?;

        info!("로그인: {} ({})", session.user.email, session.user.id);
        Ok(session)
    }

    /// 액세스 토큰 재발급
    ///
    /// 리프레시 토큰은 회전하지 않습니다. 같은 리프레시 토큰으로 만료 전까지
    /// 반복해서 갱신할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 없음, 검증 실패, 저장된 값과 불일치
    pub async fn refresh(&self, refresh_token: Option<&str>) -> AppResult<String> {
        let Some(refresh_token) = refresh_token.filter(|token| !token.is_empty()) else {
            return Err(AppError::AuthenticationError(MISSING_REFRESH_TOKEN_MESSAGE.to_string()));
        };

        let claims = self.tokens
            .verify(TokenKind::Refresh, refresh_token)
            .map_err(|e| {
                debug!("리프레시 토큰 검증 실패 [{}]: {}", fingerprint(refresh_token), e);
                invalid_refresh_token()
            })?;

        let stored = self.sessions.get(&session_key(&claims.sub)).await?;

        if stored.as_deref() != Some(refresh_token) {
            warn!(
                "저장된 세션과 일치하지 않는 리프레시 토큰: user={} [{}]",
                claims.sub,
                fingerprint(refresh_token)
            );
            return Err(invalid_refresh_token());
        }

        let access_token = self.tokens
            .mint(TokenKind::Access, &claims.sub)
            .map_err(codec_fault)?;

        debug!("액세스 토큰 재발급: user={}", claims.sub);
        Ok(access_token)
    }

    /// 로그아웃
    ///
    /// 검증 가능한 리프레시 토큰이 있으면 해당 사용자의 세션 레코드를 삭제합니다.
    /// 토큰이 없거나 검증에 실패해도 성공으로 처리합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::RedisError` - 세션 레코드 삭제 실패
    pub async fn logout(&self, refresh_token: Option<&str>) -> AppResult<()> {
        let Some(refresh_token) = refresh_token.filter(|token| !token.is_empty()) else {
            return Ok(());
        };

        match self.tokens.verify(TokenKind::Refresh, refresh_token) {
            Ok(claims) => {
                self.sessions.delete(&session_key(&claims.sub)).await?;
                info!("로그아웃: user={}", claims.sub);
            }
            Err(e) => {
                debug!("로그아웃 시 리프레시 토큰 무시 [{}]: {}", fingerprint(refresh_token), e);
            }
        }

        Ok(())
    }

    /// 인증된 사용자의 프로필
    pub fn profile(&self, user: AuthenticatedUser) -> UserResponse {
        user.into_inner()
    }

    /// 액세스 토큰으로 사용자를 확인합니다 (인증 미들웨어용).
    ///
    /// 토큰이 유효해도 사용자가 삭제되었다면 401입니다.
    pub async fn authenticate(&self, access_token: &str) -> AppResult<UserResponse> {
        let claims = self.tokens
            .verify(TokenKind::Access, access_token)
            .map_err(|e| {
                debug!("액세스 토큰 검증 실패 [{}]: {}", fingerprint(access_token), e);
                AppError::AuthenticationError(INVALID_ACCESS_TOKEN_MESSAGE.to_string())
            })?;

        match self.users.find_by_id(&claims.sub).await? {
            Some(user) => Ok(UserResponse::from(user)),
            None => {
                warn!("유효한 액세스 토큰의 사용자가 존재하지 않음: {}", claims.sub);
                Err(AppError::AuthenticationError(INVALID_ACCESS_TOKEN_MESSAGE.to_string()))
            }
        }
    }

    /// 토큰 쌍을 발급하고 세션 레코드를 덮어씁니다.
    async fn issue(&self, user: User) -> AppResult<IssuedSession> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        let tokens = self.tokens.mint_pair(&user_id).map_err(codec_fault)?;

        self.sessions
            .put(
                &session_key(&user_id),
                &tokens.refresh_token,
                self.config.refresh_ttl_seconds(),
            )
            .await?;

        debug!("세션 발급: user={} [{}]", user_id, fingerprint(&tokens.refresh_token));

        Ok(IssuedSession {
            user: UserResponse::from(user),
            tokens,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string())
}

fn invalid_refresh_token() -> AppError {
    AppError::AuthenticationError(INVALID_REFRESH_TOKEN_MESSAGE.to_string())
}

fn codec_fault(error: TokenError) -> AppError {
    AppError::InternalError(format!("토큰 발급 실패: {}", error))
}

/// 필드별 첫 번째 검증 메시지를 모아 하나의 문자열로 만듭니다.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();

    messages.sort();
    messages.join(", ")
}
