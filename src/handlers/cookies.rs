//! 세션 쿠키 정책
//!
//! 토큰은 응답 본문이 아닌 `HttpOnly` 쿠키로만 전달됩니다.
//!
//! | 쿠키 | Max-Age | 속성 |
//! |------|---------|------|
//! | `accessToken` | 액세스 토큰 수명 (15분) | HttpOnly, SameSite=Strict, Path=/ |
//! | `refreshToken` | 리프레시 토큰 수명 (7일) | HttpOnly, SameSite=Strict, Path=/ |
//!
//! 운영 환경(production)에서는 `Secure` 속성이 추가됩니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;

use crate::config::AuthConfig;

/// 액세스 토큰 쿠키 이름
pub const ACCESS_COOKIE: &str = "accessToken";

/// 리프레시 토큰 쿠키 이름
pub const REFRESH_COOKIE: &str = "refreshToken";

/// 세션 쿠키 생성 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    secure: bool,
    access_max_age: Duration,
    refresh_max_age: Duration,
}

impl CookiePolicy {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            secure: config.secure_cookies(),
            access_max_age: Duration::seconds(config.access_ttl.num_seconds()),
            refresh_max_age: Duration::seconds(config.refresh_ttl.num_seconds()),
        }
    }

    /// `accessToken` 쿠키
    pub fn access_cookie(&self, token: &str) -> Cookie<'static> {
        self.build(ACCESS_COOKIE, token.to_string(), self.access_max_age)
    }

    /// `refreshToken` 쿠키
    pub fn refresh_cookie(&self, token: &str) -> Cookie<'static> {
        self.build(REFRESH_COOKIE, token.to_string(), self.refresh_max_age)
    }

    /// 즉시 만료되는 빈 쿠키 (브라우저에서 삭제됨)
    ///
    /// 브라우저는 이름, Path, 도메인이 같아야 쿠키를 교체하므로 발급할 때와 같은 속성을 사용합니다.
    pub fn cleared(&self, name: &'static str) -> Cookie<'static> {
        self.build(name, String::new(), Duration::ZERO)
    }

    fn build(&self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build(name, value)
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .path("/")
            .max_age(max_age)
            .finish()
    }
}

/// 요청 쿠키 값을 읽습니다. 빈 값은 없는 것으로 취급합니다.
pub fn read_cookie(req: &HttpRequest, name: &str) -> Option<String> {
    req.cookie(name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn policy(environment: Environment) -> CookiePolicy {
        let config = AuthConfig::new("access-secret", "refresh-secret", environment).unwrap();
        CookiePolicy::from_config(&config)
    }

    #[test]
    fn test_access_cookie_attributes() {
        let cookie = policy(Environment::Development).access_cookie("token-value");

        assert_eq!(cookie.name(), "accessToken");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::minutes(15)));
        assert_ne!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_refresh_cookie_lifetime() {
        let cookie = policy(Environment::Development).refresh_cookie("token-value");

        assert_eq!(cookie.name(), "refreshToken");
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn test_secure_only_in_production() {
        assert_eq!(policy(Environment::Production).access_cookie("t").secure(), Some(true));
        assert_ne!(policy(Environment::Staging).access_cookie("t").secure(), Some(true));
    }

    #[test]
    fn test_cleared_cookie_expires_immediately() {
        let cookie = policy(Environment::Production).cleared(REFRESH_COOKIE);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookie.to_string().contains("Max-Age=0"));
    }
}
