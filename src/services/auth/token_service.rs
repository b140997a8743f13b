//! JWT 토큰 코덱 구현
//!
//! 액세스 토큰과 리프레시 토큰을 HS256으로 서명하고 검증합니다.
//! 두 종류는 서로 다른 비밀키를 사용하므로, 액세스 토큰은 리프레시 토큰으로
//! 검증되지 않고 그 반대도 마찬가지입니다.
//!
//! 만료 검사는 `jsonwebtoken`의 시계 대신 호출자가 넘긴 시각으로 수행합니다.
//! 검증 결과는 (토큰, 시각)만으로 결정됩니다.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::domain::models::token::token::{TokenClaims, TokenKind, TokenPair};

/// 토큰 발급/검증 실패 사유
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 서명 불일치, 형식 오류, 다른 종류의 토큰
    #[error("invalid token signature")]
    InvalidSignature,

    /// `exp`가 검증 시각 이전이거나 같음
    #[error("token expired")]
    Expired,

    /// 서명 생성 실패
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

/// JWT 토큰 코덱
///
/// `AuthConfig`에서 두 비밀키와 수명을 받아 만들어지며 이후 변경되지 않습니다.
pub struct TokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: chrono::Duration,
    refresh_ttl: chrono::Duration,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret().as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret().as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret().as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret().as_bytes()),
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
            validation,
        }
    }

    /// 현재 시각 기준으로 토큰을 발급합니다.
    pub fn mint(&self, kind: TokenKind, subject: &str) -> Result<String, TokenError> {
        self.mint_at(kind, subject, Utc::now())
    }

    /// 지정한 시각을 `iat`로 하여 토큰을 발급합니다.
    ///
    /// `exp = iat + 종류별 수명`이며, `jti`는 매번 새 UUID v4입니다.
    pub fn mint_at(&self, kind: TokenKind, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl(kind)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.encoding_key(kind))
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// 액세스 토큰과 리프레시 토큰을 같은 시각 기준으로 발급합니다.
    pub fn mint_pair(&self, subject: &str) -> Result<TokenPair, TokenError> {
        let now = Utc::now();

        Ok(TokenPair {
            access_token: self.mint_at(TokenKind::Access, subject, now)?,
            refresh_token: self.mint_at(TokenKind::Refresh, subject, now)?,
        })
    }

    /// 현재 시각 기준으로 토큰을 검증합니다.
    pub fn verify(&self, kind: TokenKind, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(kind, token, Utc::now())
    }

    /// 지정한 시각 기준으로 토큰을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSignature` - 서명 불일치, 형식 오류, 필수 클레임 누락
    /// * `TokenError::Expired` - `exp <= now`
    pub fn verify_at(&self, kind: TokenKind, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, self.decoding_key(kind), &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("{} 토큰 디코딩 실패: {}", kind, e);
                TokenError::InvalidSignature
            })?;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// 토큰 종류별 수명
    pub fn ttl(&self, kind: TokenKind) -> chrono::Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    fn encoding_key(&self, kind: TokenKind) -> &EncodingKey {
        match kind {
            TokenKind::Access => &self.access_encoding,
            TokenKind::Refresh => &self.refresh_encoding,
        }
    }

    fn decoding_key(&self, kind: TokenKind) -> &DecodingKey {
        match kind {
            TokenKind::Access => &self.access_decoding,
            TokenKind::Refresh => &self.refresh_decoding,
        }
    }
}

/// Bearer 토큰에서 실제 토큰 부분 추출
///
/// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
///
/// ```rust,ignore
/// let token = extract_bearer_token("Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
/// ```
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use chrono::Duration;

    fn codec() -> TokenService {
        let config = AuthConfig::new(
            "access-secret-for-tests".to_string(),
            "refresh-secret-for-tests".to_string(),
            Environment::Test,
        )
        .unwrap();

        TokenService::new(&config)
    }

    #[test]
    fn test_mint_then_verify_same_kind() {
        let codec = codec();
        let now = Utc::now();

        let token = codec.mint_at(TokenKind::Access, "user-1", now).unwrap();
        let claims = codec.verify_at(TokenKind::Access, &token, now).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, (now + Duration::minutes(15)).timestamp());
    }

    #[test]
    fn test_kinds_do_not_cross_verify() {
        let codec = codec();

        let access = codec.mint(TokenKind::Access, "user-1").unwrap();
        let refresh = codec.mint(TokenKind::Refresh, "user-1").unwrap();

        assert_eq!(codec.verify(TokenKind::Refresh, &access), Err(TokenError::InvalidSignature));
        assert_eq!(codec.verify(TokenKind::Access, &refresh), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_expiry_boundary() {
        let codec = codec();
        let issued = Utc::now();
        let token = codec.mint_at(TokenKind::Access, "user-1", issued).unwrap();

        let just_before = issued + Duration::minutes(15) - Duration::seconds(1);
        let at_expiry = issued + Duration::minutes(15);

        assert!(codec.verify_at(TokenKind::Access, &token, just_before).is_ok());
        assert_eq!(
            codec.verify_at(TokenKind::Access, &token, at_expiry),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_refresh_token_lives_seven_days() {
        let codec = codec();
        let issued = Utc::now();
        let token = codec.mint_at(TokenKind::Refresh, "user-1", issued).unwrap();

        assert!(codec.verify_at(TokenKind::Refresh, &token, issued + Duration::days(6)).is_ok());
        assert_eq!(
            codec.verify_at(TokenKind::Refresh, &token, issued + Duration::days(7)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_malformed_token_is_invalid_signature() {
        let codec = codec();

        assert_eq!(codec.verify(TokenKind::Access, "not.a.jwt"), Err(TokenError::InvalidSignature));
        assert_eq!(codec.verify(TokenKind::Access, ""), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let codec = codec();
        let token = codec.mint(TokenKind::Access, "user-1").unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        parts[2] = "c2lnbmF0dXJlLXRhbXBlcmVk";
        let tampered = parts.join(".");

        assert_eq!(codec.verify(TokenKind::Access, &tampered), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_same_second_tokens_differ() {
        let codec = codec();
        let now = Utc::now();

        let first = codec.mint_at(TokenKind::Refresh, "user-1", now).unwrap();
        let second = codec.mint_at(TokenKind::Refresh, "user-1", now).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(extract_bearer_token("Bearer "), None);
    }
}
