//! 통합 테스트용 인메모리 저장소와 앱 구성 헬퍼
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::ServiceResponse;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use session_auth_backend::config::{AuthConfig, Environment};
use session_auth_backend::domain::entities::users::user::{normalize_email, NewUser, User};
use session_auth_backend::errors::{AppError, AppResult};
use session_auth_backend::repositories::stores::{CredentialStore, SessionCache};
use session_auth_backend::services::auth::SessionService;

pub const TEST_BCRYPT_COST: u32 = 4;

/// 인메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUsers {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn remove_by_email(&self, email: &str) {
        let email = normalize_email(email);
        self.users.lock().unwrap().retain(|_, user| user.email != email);
    }
}

#[async_trait]
impl CredentialStore for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = normalize_email(email);
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        if self.find_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        let hash = bcrypt::hash(&new_user.password, TEST_BCRYPT_COST)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        let mut user = User::new(new_user.name, &new_user.email, hash);
        let id = ObjectId::new();
        user.id = Some(id);

        self.users.lock().unwrap().insert(id.to_hex(), user.clone());
        Ok(user)
    }

    async fn verify_password(&self, user: &User, candidate: &str) -> AppResult<bool> {
        bcrypt::verify(candidate, &user.password).map_err(|e| AppError::InternalError(e.to_string()))
    }
}

/// 호출 횟수를 세는 인메모리 세션 캐시
///
/// `fail`을 켜면 모든 연산이 `RedisError`를 반환합니다.
#[derive(Default)]
pub struct InMemorySessions {
    entries: Mutex<HashMap<String, (String, u64)>>,
    pub puts: AtomicUsize,
    pub gets: AtomicUsize,
    pub deletes: AtomicUsize,
    fail: AtomicBool,
}

impl InMemorySessions {
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).map(|(value, _)| value.clone())
    }

    pub fn ttl(&self, key: &str) -> Option<u64> {
        self.entries.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// TTL 만료를 흉내 냅니다.
    pub fn expire(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn total_calls(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
            + self.gets.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
    }

    fn check(&self) -> AppResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(AppError::RedisError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionCache for InMemorySessions {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> AppResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.value(key))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// 테스트 하네스: 서비스와 그 저장소들
pub struct Harness {
    pub users: Arc<InMemoryUsers>,
    pub sessions: Arc<InMemorySessions>,
    pub service: SessionService,
}

pub fn auth_config(environment: Environment) -> AuthConfig {
    AuthConfig::new(
        "test-access-secret-0123456789",
        "test-refresh-secret-9876543210",
        environment,
    )
    .unwrap()
}

pub fn harness() -> Harness {
    harness_with(auth_config(Environment::Test))
}

pub fn harness_with(config: AuthConfig) -> Harness {
    let users = Arc::new(InMemoryUsers::default());
    let sessions = Arc::new(InMemorySessions::default());
    let service = SessionService::new(config, users.clone(), sessions.clone());

    Harness {
        users,
        sessions,
        service,
    }
}

/// 응답의 `Set-Cookie`에서 쿠키 값을 찾습니다.
pub fn response_cookie<B>(resp: &ServiceResponse<B>, name: &str) -> Option<actix_web::cookie::Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.into_owned())
}
