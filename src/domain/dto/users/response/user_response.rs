use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::{Role, User};

/// 공개 사용자 정보 DTO
///
/// 비밀번호와 타임스탬프 등 내부 필드는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            role,
        }
    }
}

/// 회원가입/로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub message: String,
}

impl AuthResponse {
    pub fn new(user: UserResponse, message: impl Into<String>) -> Self {
        Self {
            user,
            message: message.into(),
        }
    }
}

/// 메시지만 담는 응답 DTO (로그아웃, 토큰 갱신)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_projection_drops_password() {
        let mut user = User::new("Alice".to_string(), "alice@example.com", "$2b$04$hash".to_string());
        let oid = ObjectId::new();
        user.id = Some(oid);

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], oid.to_hex());
        assert_eq!(json["role"], "user");
        assert!(json.get("password").is_none());
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
