//! 로그용 토큰 지문
//!
//! 토큰 원문은 로그에 남기지 않습니다. 같은 토큰인지 추적이 필요할 때는
//! SHA-256 해시의 앞 12자리 16진 문자열을 대신 남깁니다.

use sha2::{Digest, Sha256};

const FINGERPRINT_BYTES: usize = 6;

/// 토큰의 짧은 SHA-256 지문을 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// log::debug!("리프레시 토큰 저장: {}", fingerprint(&refresh_token));
/// ```
pub fn fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());

    digest
        .iter()
        .take(FINGERPRINT_BYTES)
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_short_and_stable() {
        let a = fingerprint("eyJhbGciOiJIUzI1NiJ9.payload.signature");
        let b = fingerprint("eyJhbGciOiJIUzI1NiJ9.payload.signature");

        assert_eq!(a, b);
        assert_eq!(a.len(), FINGERPRINT_BYTES * 2);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_differs_per_token() {
        assert_ne!(fingerprint("token-a"), fingerprint("token-b"));
    }

    #[test]
    fn test_fingerprint_of_known_input() {
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(fingerprint("abc"), "ba7816bf8f01");
    }
}
