use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 액세스 토큰 인증 미들웨어
///
/// 유효한 액세스 토큰이 없으면 401 `{"message": ...}`으로 응답하고 핸들러를 호출하지 않습니다.
/// 성공하면 `AuthenticatedUser`를 Request Extensions에 넣습니다.
///
/// ```rust,ignore
/// #[get("/profile", wrap = "AuthMiddleware::required()")]
/// async fn profile(user: AuthenticatedUser) -> HttpResponse { ... }
/// ```
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
