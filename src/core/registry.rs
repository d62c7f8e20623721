//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! `#[service]` / `#[repository]` 매크로가 생성한 등록 정보를 `inventory`로 수집하고,
//! 타입별로 정확히 하나의 인스턴스를 보관하는 전역 컨테이너입니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[repository] → RepositoryRegistration (ProfileRepository, AuthLinkRepository, ...)
//!    ├─ #[service]    → ServiceRegistration (TokenService)
//!    └─ inventory::collect! 로 전역 수집
//!
//! 2. 부팅
//!    ├─ ServiceLocator::set(Database), ServiceLocator::set(RedisClient)
//!    ├─ ServiceLocator::initialize_all()  → 모든 등록 컴포넌트 생성
//!    └─ ServiceLocator::set(ProfileService) → 트레이트 객체로 조립된 파사드 등록
//!
//! 3. 요청 처리
//!    └─ ServiceLocator::get::<ProfileService>() → 캐시된 인스턴스 반환
//! ```
//!
//! 타입 이름 접미사(`Repository`, `Service`)를 제거하고 소문자로 바꾼 값이
//! 매크로의 `name` 인자와 일치해야 합니다. 예: `AuthLinkRepository` → `authlink`.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// `#[service]` 매크로가 적용된 구조체가 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 레지스트리에서 서비스를 식별하는 이름
    fn name(&self) -> &str;

    /// 서비스 생성 직후 호출되는 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// `#[repository]` 매크로가 적용된 구조체가 자동 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 레지스트리에서 리포지토리를 식별하는 이름
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 인덱스 생성 등 데이터 계층 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]` 매크로가 제출하는 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// `#[repository]` 매크로가 제출하는 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 정규화된 서비스 이름 → 등록 정보
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (normalize_registration_name(registration.name), registration))
        .collect();

    log::debug!("Service cache: {} entries loaded", cache.len());
    cache
});

/// 정규화된 리포지토리 이름 → 등록 정보
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (normalize_registration_name(registration.name), registration))
        .collect();

    log::debug!("Repository cache: {} entries loaded", cache.len());
    cache
});

/// `profile_repository`, `token_service` 형태의 등록 이름에서 접미사를 제거합니다.
fn normalize_registration_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// `crate::repositories::profiles::ProfileRepository` → `ProfileRepository`
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 컴포넌트 종류별 조회 대상
enum ComponentKind {
    Repository(String),
    Service(String),
}

impl ComponentKind {
    fn classify(short_name: &str) -> Option<Self> {
        if let Some(entity) = short_name.strip_suffix("Repository") {
            return Some(ComponentKind::Repository(entity.to_lowercase()));
        }
        if let Some(entity) = short_name.strip_suffix("Service") {
            return Some(ComponentKind::Service(entity.to_lowercase()));
        }
        None
    }
}

/// 싱글톤 의존성 주입 컨테이너
pub struct ServiceLocator {
    /// 타입별 싱글톤 인스턴스
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 생성 중인 타입 (순환 참조 감지용)
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    fn cached<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().expect("ServiceLocator lock poisoned");
        instances
            .get(&TypeId::of::<T>())
            .map(|instance| {
                instance
                    .clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator")
            })
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 이미 생성되었거나 `set`으로 등록된 인스턴스가 있으면 그대로 반환하고,
    /// 없으면 매크로 등록 정보의 생성자로 만들어 캐시합니다.
    ///
    /// # Panics
    ///
    /// - 순환 참조가 감지된 경우
    /// - 등록 정보가 없거나 타입이 일치하지 않는 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        if let Some(instance) = Self::cached::<T>() {
            return instance;
        }

        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let mut initializing = LOCATOR.initializing.write().expect("ServiceLocator lock poisoned");
            if !initializing.insert(type_id) {
                log::error!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let result = std::panic::catch_unwind(|| Self::construct::<T>(type_name));

        LOCATOR
            .initializing
            .write()
            .expect("ServiceLocator lock poisoned")
            .remove(&type_id);

        match result {
            Ok(instance) => {
                LOCATOR
                    .instances
                    .write()
                    .expect("ServiceLocator lock poisoned")
                    .entry(type_id)
                    .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>);
                Self::cached::<T>().unwrap_or(instance)
            }
            Err(e) => {
                log::error!("Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let short_name = short_type_name(type_name);

        let (kind, constructor) = match ComponentKind::classify(short_name) {
            Some(ComponentKind::Repository(entity)) => match REPOSITORY_NAME_CACHE.get(&entity) {
                Some(registration) => ("repository", registration.constructor),
                None => panic!("No repository found for entity: {}", entity),
            },
            Some(ComponentKind::Service(entity)) => match SERVICE_NAME_CACHE.get(&entity) {
                Some(registration) => ("service", registration.constructor),
                None => panic!("No service found for entity: {}", entity),
            },
            None => panic!(
                "Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()",
                type_name
            ),
        };

        match constructor().downcast::<Arc<T>>() {
            Ok(instance) => (*instance).clone(),
            Err(_) => panic!("Type mismatch for {}: {}", kind, short_name),
        }
    }

    /// 매크로로 관리되지 않는 인스턴스를 직접 등록합니다.
    ///
    /// `Database`, `RedisClient`와 트레이트 객체로 조립되는 `ProfileService`가
    /// 이 경로로 등록됩니다. 같은 타입을 다시 등록하면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        log::info!("📦 Registering: {}", short_type_name(std::any::type_name::<T>()));

        LOCATOR
            .instances
            .write()
            .expect("ServiceLocator lock poisoned")
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저, 서비스를 나중에 생성합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        log::info!("🔄 Initializing service registry");

        let mut repo_count = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            log::debug!("   ├─ {}: created", registration.name);
            repo_count += 1;
        }

        let mut service_count = 0;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _instance = (registration.constructor)();
            log::debug!("   ├─ {}: created", registration.name);
            service_count += 1;
        }

        log::info!(
            "🎉 Service registry initialized: {} repositories, {} services",
            repo_count,
            service_count
        );

        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
