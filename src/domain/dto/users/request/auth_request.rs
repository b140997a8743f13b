//! 인증 요청 관련 DTO
//!
//! 회원가입/로그인 요청 본문을 매핑합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::users::user::NewUser;

/// 회원가입 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,

    #[validate(
        length(max = 100, message = "이름은 100자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

/// 공백만으로 된 이름 거부 (저장 시 trim되어 빈 문자열이 되므로)
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("이름을 입력해주세요".into()));
    }
    Ok(())
}

impl From<SignupRequest> for NewUser {
    fn from(request: SignupRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

/// 로그인 요청 구조체
///
/// 형식 검증을 하지 않습니다. 잘못된 이메일 형식도 "존재하지 않는 사용자"와
/// 같은 401 응답으로 처리되어야 하기 때문입니다.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
            name: "Alice".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            ..valid
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let request = SignupRequest {
            email: "alice@example.com".to_string(),
            password: "123".to_string(),
            name: "Alice".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_blank_name_rejected() {
        for name in ["", "   ", "\t\n"] {
            let request = SignupRequest {
                email: "alice@example.com".to_string(),
                password: "secret123".to_string(),
                name: name.to_string(),
            };
            let errors = request.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("name"), "name {:?} accepted", name);
        }
    }
}
