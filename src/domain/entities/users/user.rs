//! User Entity Implementation
//!
//! 자격 증명 저장소(MongoDB `users` 컬렉션)에 저장되는 사용자 엔티티입니다.
//! 세션 매니저는 이 엔티티를 읽기만 하며 수정하지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 가입 시 기본값은 `User`이며, `Admin`은 운영자가 직접 부여합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 사용자
    #[default]
    User,
    /// 관리자
    Admin,
}

/// 사용자 엔티티
///
/// `password` 필드는 bcrypt 해시이며 저장소 경계 밖으로 나가지 않습니다.
/// 외부로 내보낼 때는 항상 `UserResponse`로 변환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique, 소문자로 정규화됨)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
    /// 사용자 역할
    #[serde(default)]
    pub role: Role,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 엔티티 생성
    ///
    /// `password_hash`는 이미 해시된 값이어야 합니다. 이메일은 정규화되어 저장됩니다.
    pub fn new(name: String, email: &str, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name: name.trim().to_string(),
            email: normalize_email(email),
            password: password_hash,
            role: Role::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 회원가입 시 자격 증명 저장소에 전달하는 필드
///
/// 비밀번호는 평문이며, 해싱은 저장소 구현이 담당합니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// 이메일 비교/저장용 정규화 (앞뒤 공백 제거 + 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults_to_user_role() {
        let user = User::new("Alice".to_string(), " Alice@Example.COM ", "hash".to_string());

        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "alice@example.com");
        assert!(user.id.is_none());
    }

    #[test]
    fn test_document_field_names() {
        let mut user = User::new("Bob".to_string(), "bob@example.com", "hash".to_string());
        user.id = Some(ObjectId::new());

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_missing_role_deserializes_as_user() {
        let doc = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "name": "Carol",
            "email": "carol@example.com",
            "password": "hash",
            "createdAt": DateTime::now(),
            "updatedAt": DateTime::now(),
        };

        let user: User = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(user.role, Role::User);
    }
}
