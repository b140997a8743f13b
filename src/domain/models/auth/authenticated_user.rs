use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::UserResponse;
use crate::errors::AppError;

/// 액세스 토큰 검증을 통과한 요청의 사용자 정보
///
/// `AuthMiddleware`가 Request Extensions에 넣고, 핸들러는 추출자로 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthenticatedUser(pub UserResponse);

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str {
        &self.0.id
    }

    pub fn into_inner(self) -> UserResponse {
        self.0
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어를 거친 라우트에서만 사용해야 합니다. 사용자 정보가 없다면
/// 라우트 구성 오류이므로 500으로 응답합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::InternalError(format!(
                "인증 미들웨어 없이 호출된 라우트: {}",
                req.path()
            )))),
        }
    }
}
