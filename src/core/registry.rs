//! # Service Registry & Dependency Injection Container
//!
//! 애플리케이션 컴포넌트를 타입 기반으로 보관하고 주입하는 경량 DI 컨테이너입니다.
//! Spring의 `ApplicationContext`처럼 동작하되, 생성 시점을 명시적으로 드러냅니다.
//!
//! ## 구성 요소
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `ApplicationContext` | [`ServiceLocator`] | 전역 컴포넌트 컨테이너 |
//! | `@Component` 스캔 | `inventory::submit!` + [`ServiceRegistration`] | 서비스 자동 수집 |
//! | `@Autowired` | [`ServiceLocator::get`] | 타입 기반 조회 |
//! | `registerSingleton` | [`ServiceLocator::set`] | 인프라 컴포넌트 수동 등록 |
//!
//! ## 초기화 순서
//!
//! ```text
//! 1. main()
//!    ├─ UserRepository::new()           ← 저장소는 여기서 단 한 번 생성
//!    └─ ServiceLocator::set(repo)
//!
//! 2. ServiceLocator::initialize_all()
//!    ├─ inventory로 수집된 ServiceRegistration 순회
//!    ├─ constructor() 호출 → 내부에서 ServiceLocator::get::<UserRepository>()
//!    └─ 생성된 인스턴스를 TypeId 키로 보관
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_store_service::core::registry::ServiceLocator;
//! use user_store_service::repositories::users::user_repo::UserRepository;
//!
//! ServiceLocator::set(Arc::new(UserRepository::new()));
//! ServiceLocator::initialize_all()?;
//!
//! let repo = ServiceLocator::get::<UserRepository>()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use once_cell::sync::Lazy;
use crate::core::errors::{AppError, AppResult};
use crate::utils::display_terminal::{print_boxed_title, print_registry_summary, print_step_complete, print_step_start, print_sub_task};

/// 컨테이너에 보관되는 타입 소거된 컴포넌트
pub type Component = Arc<dyn Any + Send + Sync>;

/// 자동 등록되는 서비스의 메타데이터
///
/// 서비스 모듈에서 `inventory::submit!`으로 제출하면
/// [`ServiceLocator::initialize_all`]이 시작 시점에 생성자를 호출합니다.
///
/// ```rust,ignore
/// inventory::submit! {
///     crate::core::registry::ServiceRegistration {
///         name: "user_service",
///         type_id: TypeId::of::<UserService>,
///         constructor: user_service_constructor,
///     }
/// }
/// ```
pub struct ServiceRegistration {
    /// 로그 출력용 이름 (예: "user_service")
    pub name: &'static str,
    /// 등록 대상 타입의 `TypeId`를 돌려주는 함수
    pub type_id: fn() -> TypeId,
    /// 인스턴스 생성 함수. 의존성이 누락되면 에러를 반환합니다.
    pub constructor: fn() -> AppResult<Component>,
}

inventory::collect!(ServiceRegistration);

/// 전역 컴포넌트 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Component>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 컴포넌트를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: Any + Send + Sync>(instance: Arc<T>) {
        log::debug!("📦 Registering: {}", Self::short_type_name::<T>());

        LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance as Component);
    }

    /// 등록된 컴포넌트를 조회합니다. 없으면 `None`.
    pub fn try_get<T: Any + Send + Sync>() -> Option<Arc<T>> {
        let instance = LOCATOR
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .cloned()?;

        instance.downcast::<T>().ok()
    }

    /// 등록된 컴포넌트를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 아직 등록되지 않은 경우
    pub fn get<T: Any + Send + Sync>() -> AppResult<Arc<T>> {
        Self::try_get::<T>().ok_or_else(|| {
            AppError::InternalError(format!(
                "Component not registered: {}. Register it with ServiceLocator::set() before use",
                Self::short_type_name::<T>()
            ))
        })
    }

    /// 해당 타입이 등록되어 있는지 확인합니다.
    pub fn contains<T: Any + Send + Sync>() -> bool {
        LOCATOR
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }

    /// `inventory`로 수집된 모든 서비스를 생성하고 컨테이너에 보관합니다.
    ///
    /// 반환값은 생성된 서비스 수입니다. 하나라도 실패하면 즉시 에러를 반환합니다.
    pub fn initialize_all() -> AppResult<usize> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let registrations: Vec<&ServiceRegistration> =
            inventory::iter::<ServiceRegistration>().collect();

        print_step_start(1, "Creating Service instances");

        for registration in &registrations {
            print_sub_task(registration.name, "Creating...");

            let instance = (registration.constructor)().map_err(|e| {
                log::error!("❌ {} 생성 실패: {}", registration.name, e);
                e
            })?;

            LOCATOR
                .instances
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert((registration.type_id)(), instance);

            print_sub_task(registration.name, "✓ Created");
        }

        print_step_complete(1, "Service instances created", registrations.len());

        let names: Vec<&str> = registrations.iter().map(|r| r.name).collect();
        print_registry_summary(&names);

        Ok(registrations.len())
    }

    fn short_type_name<T>() -> &'static str {
        let type_name = std::any::type_name::<T>();
        type_name.rsplit("::").next().unwrap_or(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        value: u32,
    }

    struct NeverRegistered;

    #[test]
    fn test_set_then_get_returns_same_instance() {
        let probe = Arc::new(Probe { value: 7 });
        ServiceLocator::set(probe.clone());

        let resolved = ServiceLocator::get::<Probe>().unwrap();
        assert!(Arc::ptr_eq(&probe, &resolved));
        assert_eq!(resolved.value, 7);
        assert!(ServiceLocator::contains::<Probe>());
    }

    #[test]
    fn test_get_unregistered_type_is_internal_error() {
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());

        match ServiceLocator::get::<NeverRegistered>() {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("NeverRegistered")),
            other => panic!("Expected InternalError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_short_type_name_strips_module_path() {
        assert_eq!(ServiceLocator::short_type_name::<Probe>(), "Probe");
    }
}
