//! # Service Registry
//!
//! `#[repository]` 매크로로 선언된 리포지토리와 직접 등록한 인프라를 싱글톤으로
//! 관리하는 의존성 주입 컨테이너입니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    #[repository(name = "user", collection = "users")]
//!    └─ inventory::submit! → RepositoryRegistration 등록
//!
//! 2. 애플리케이션 시작 (main)
//!    ServiceLocator::set(Arc::new(database))      // 인프라 수동 등록
//!    ServiceLocator::set(Arc::new(redis_client))
//!    ServiceLocator::initialize_all().await?       // 모든 리포지토리 미리 생성
//!
//! 3. 런타임
//!    UserRepository::instance()
//!    └─ ServiceLocator::get::<UserRepository>()    // 캐시된 Arc 반환
//! ```
//!
//! ## 이름 매칭
//!
//! 타입 이름의 접미사를 제거하고 소문자로 바꾼 값이 등록 이름과 일치해야 합니다.
//! `SessionRepository` → `session`, `UserRepository` → `user`.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;

/// 데이터 액세스 컴포넌트 트레이트 (`#[repository]` 매크로가 구현)
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리 등록 이름
    fn name(&self) -> &str;

    /// 대상 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// 등록 이름 (예: `user`, `user_repository`)
    pub name: &'static str,
    /// `Box<Arc<T>>`를 반환하는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(RepositoryRegistration);

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (normalize_registration_name(registration.name), registration))
        .collect();

    debug!("리포지토리 레지스트리 캐시 구성: {}개", cache.len());
    cache
});

/// `user_repository` 형태의 등록 이름에서 접미사를 제거합니다.
fn normalize_registration_name(name: &str) -> String {
    name.strip_suffix("_repository").unwrap_or(name).to_string()
}

/// `crate::repositories::sessions::SessionRepository` → `SessionRepository`
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 타입 이름에서 레지스트리 조회 키를 만듭니다. `SessionRepository` → `session`.
fn registry_key(short_name: &str) -> Option<String> {
    short_name.strip_suffix("Repository").map(str::to_lowercase)
}

/// 싱글톤 의존성 주입 컨테이너
///
/// `TypeId`마다 정확히 하나의 `Arc` 인스턴스를 보관합니다.
/// 생성 중인 타입을 추적하여 순환 의존성을 감지합니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 캐시에 없으면 등록된 생성자로 인스턴스를 만들고 캐시에 저장합니다.
    ///
    /// # Panics
    ///
    /// 시작 시점의 배선 오류는 즉시 드러나야 하므로 다음 경우 패닉합니다.
    ///
    /// - 순환 의존성 (A → B → A)
    /// - `#[repository]`로 등록되지도, `set()`으로 등록되지도 않은 타입
    /// - 등록 이름은 일치하지만 생성자가 다른 타입을 반환하는 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>(type_id) {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner());
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        // 생성자 안에서 다른 의존성을 get()하므로 인스턴스 맵 잠금 없이 생성합니다.
        let created = Self::construct::<T>(type_name);

        LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner()).remove(&type_id);

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        let instance = instances
            .entry(type_id)
            .or_insert_with(|| created as Arc<dyn Any + Send + Sync>)
            .clone();

        match instance.downcast::<T>() {
            Ok(instance) => instance,
            Err(_) => panic!("Type mismatch in ServiceLocator for {}", type_name),
        }
    }

    fn cached<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&type_id)
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let short_name = short_type_name(type_name);

        let Some(key) = registry_key(short_name) else {
            panic!(
                "Service not found: {}. Register it with #[repository] or ServiceLocator::set()",
                type_name
            );
        };

        let Some(registration) = REPOSITORY_NAME_CACHE.get(&key) else {
            panic!("No repository found for entity: {}", key);
        };

        match (registration.constructor)().downcast::<Arc<T>>() {
            Ok(instance) => *instance,
            Err(_) => panic!("Type mismatch for registration: {}", registration.name),
        }
    }

    /// 외부에서 생성한 인스턴스를 직접 등록합니다.
    ///
    /// 매크로로 관리되지 않는 인프라 컴포넌트(`Database`, `RedisClient`)는
    /// 리포지토리를 처음 조회하기 전에 반드시 등록해야 합니다.
    ///
    /// ```rust,ignore
    /// ServiceLocator::set(Arc::new(database));
    /// ServiceLocator::set(Arc::new(redis_client));
    /// ServiceLocator::initialize_all().await?;
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();

        info!("📦 Registering: {}", short_type_name(std::any::type_name::<T>()));

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리를 미리 생성합니다.
    ///
    /// 인프라가 `set()`으로 등록되어 있지 않으면 여기서 패닉이 발생하므로
    /// 배선 오류가 첫 요청이 아닌 시작 시점에 드러납니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        info!("🔄 서비스 레지스트리 초기화");

        let mut repository_count = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            debug!("  ✓ repository: {}", registration.name);
            repository_count += 1;
        }

        info!("✅ 레지스트리 초기화 완료 (repositories: {})", repository_count);

        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
