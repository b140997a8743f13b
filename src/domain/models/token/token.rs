//! JWT 클레임, 토큰 종류, 토큰 쌍
//!
//! 액세스 토큰과 리프레시 토큰은 같은 클레임 구조를 쓰고 서명 비밀키만 다릅니다.
use serde::{Deserialize, Serialize};

/// 토큰 종류
///
/// 종류마다 서로 다른 비밀키로 서명되므로 한 종류의 토큰은
/// 다른 종류로 검증되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// 단기 액세스 토큰 (API 접근용)
    Access,
    /// 장기 리프레시 토큰 (액세스 토큰 재발급 전용)
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 사용자 ID (MongoDB ObjectId 16진 문자열)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID. 같은 초에 같은 사용자에게 발급된 토큰끼리도 구별됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// 한 번의 로그인/가입으로 발급되는 토큰 쌍
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
