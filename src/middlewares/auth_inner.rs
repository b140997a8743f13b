use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::handlers::cookies::ACCESS_COOKIE;
use crate::services::auth::{extract_bearer_token, SessionService, MISSING_ACCESS_TOKEN_MESSAGE};

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate_request(&req).await {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id());
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패 {} {}: {}", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

async fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let session_service = req
        .app_data::<web::Data<SessionService>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("SessionService가 앱 데이터에 등록되지 않았습니다".to_string()))?;

    let token = extract_access_token(req)
        .ok_or_else(|| AppError::AuthenticationError(MISSING_ACCESS_TOKEN_MESSAGE.to_string()))?;

    let user = session_service.authenticate(&token).await?;
    Ok(AuthenticatedUser(user))
}

/// `accessToken` 쿠키를 우선 사용하고, 없으면 `Authorization: Bearer` 헤더를 확인합니다.
fn extract_access_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(ACCESS_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .map(str::to_string)
}
