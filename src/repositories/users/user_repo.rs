//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `users` 컬렉션을 저장소로 사용하며 [`CredentialStore`]를 구현합니다.
//!
//! ## 특징
//!
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **데이터 무결성**: `email` 유니크 인덱스로 동시 가입 경쟁 상태에서도 중복 방지
//! - **비밀번호 해싱**: bcrypt, 블로킹 스레드풀에서 실행

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;

use crate::{
    config::PasswordConfig,
    db::Database,
    domain::entities::users::user::{normalize_email, NewUser, User},
    errors::{AppError, AppResult, ErrorContext},
    repositories::stores::CredentialStore,
};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 저장 형식
///
/// - **컬렉션명**: `users`
/// - **인덱스**: `email`(unique), `createdAt`(desc)
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ConflictError**: 이미 가입된 이메일
/// - **InternalError**: bcrypt 해싱 실패
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::users::UserRepository;
///
/// let repo = UserRepository::instance();
/// repo.create_indexes().await?;
///
/// let created = repo.create(NewUser {
///     name: "Alice".to_string(),
///     email: "alice@example.com".to_string(),
///     password: "secret123".to_string(),
/// }).await?;
///
/// let found = repo.find_by_email("ALICE@example.com").await?;
/// ```
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
}

impl UserRepository {
    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 무시됩니다.
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 이메일이 있으면 유니크 인덱스 생성이 실패합니다
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<User>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    /// 이메일 주소로 사용자 조회
    ///
    /// 저장 시와 동일하게 정규화(공백 제거 + 소문자)한 뒤 조회합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection::<User>()
            .find_one(doc! { "email": normalize_email(email) })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            debug!("ObjectId 형식이 아닌 사용자 ID: {}", id);
            return Ok(None);
        };

        self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 1. **중복 확인**: 같은 이메일이 있으면 `ConflictError`
    /// 2. **비밀번호 해싱**: 환경별 bcrypt cost
    /// 3. **저장**: 유니크 인덱스 위반(11000)도 `ConflictError`로 변환
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        if self.find_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        let password_hash = hash_password(new_user.password, PasswordConfig::bcrypt_cost()).await?;
        let mut user = User::new(new_user.name, &new_user.email, password_hash);

        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("User already exists".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();

        if user.id.is_none() {
            error!("insert_one 결과에 ObjectId가 없습니다: {:?}", result.inserted_id);
            return Err(AppError::DatabaseError("사용자 ID 할당 실패".to_string()));
        }

        Ok(user)
    }

    async fn verify_password(&self, user: &User, candidate: &str) -> AppResult<bool> {
        let hash = user.password.clone();
        let candidate = candidate.to_string();

        actix_web::web::block(move || bcrypt::verify(candidate, &hash))
            .await
            .context("비밀번호 검증 작업 실패")?
            .context("비밀번호 검증 실패")
    }
}

/// bcrypt 해싱을 블로킹 스레드풀에서 실행합니다.
async fn hash_password(password: String, cost: u32) -> AppResult<String> {
    actix_web::web::block(move || bcrypt::hash(password, cost))
        .await
        .context("비밀번호 해싱 작업 실패")?
        .context("비밀번호 해싱 실패")
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}
