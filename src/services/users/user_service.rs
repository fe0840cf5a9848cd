//! # 사용자 관리 서비스 구현
//!
//! HTTP 핸들러와 [`UserRepository`] 사이의 비즈니스 계층입니다.
//! 저장소의 부재 표현(`None`)을 [`AppError::NotFound`]로 바꾸고,
//! 각 연산을 로그로 남깁니다.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Handlers   │ ──▶ │ UserService  │ ──▶ │  UserRepository  │
//! │ (HTTP/JSON)  │     │ None → 404   │     │ RwLock<UserTable>│
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```

use std::any::TypeId;
use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::{
    core::{
        errors::{AppError, AppResult},
        registry::{Component, ServiceLocator},
    },
    domain::{
        dto::users::request::{CreateUserRequest, UpdateUserRequest},
        entities::users::user::{User, UserId},
    },
    repositories::users::user_repo::UserRepository,
};

static USER_SERVICE_INSTANCE: OnceCell<Arc<UserService>> = OnceCell::new();

/// 사용자 CRUD 비즈니스 로직 서비스
///
/// ## 생성 방법
///
/// - 애플리케이션: [`UserService::instance`]가 `ServiceLocator`에서
///   `UserRepository`를 찾아 싱글톤을 만듭니다.
/// - 테스트: [`UserService::new`]에 저장소를 직접 넘깁니다.
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(UserRepository::new()));
/// let user = service.create_user(CreateUserRequest::named("Alice"))?;
/// let found = service.get_user(user.id)?;
/// ```
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 전역 싱글톤 인스턴스를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `UserRepository`가 아직 등록되지 않은 경우
    pub fn instance() -> AppResult<Arc<Self>> {
        USER_SERVICE_INSTANCE
            .get_or_try_init(|| {
                let user_repo = ServiceLocator::get::<UserRepository>()?;
                Ok(Arc::new(Self::new(user_repo)))
            })
            .map(Arc::clone)
    }

    /// 새 사용자를 생성합니다.
    ///
    /// 저장소 연산 자체는 실패하지 않습니다.
    pub fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let user = self.user_repo.create(request);
        log::info!("사용자 생성 완료: id={}", user.id);

        Ok(user)
    }

    /// 모든 사용자를 생성 순서대로 반환합니다.
    pub fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.user_repo.find_all();
        log::debug!("사용자 목록 조회: {}명", users.len());

        Ok(users)
    }

    pub fn get_user(&self, id: UserId) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .ok_or_else(|| Self::not_found(id))
    }

    /// 사용자 속성을 부분 수정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없는 경우 (저장소는 변경되지 않음)
    pub fn update_user(&self, id: UserId, changes: UpdateUserRequest) -> AppResult<User> {
        if changes.is_empty() {
            log::debug!("변경 사항 없는 수정 요청: id={}", id);
        }

        let user = self.user_repo
            .update(id, changes)
            .ok_or_else(|| Self::not_found(id))?;
        log::info!("사용자 수정 완료: id={}", id);

        Ok(user)
    }

    /// 사용자를 삭제하고 삭제된 레코드를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없거나 이미 삭제된 경우
    pub fn delete_user(&self, id: UserId) -> AppResult<User> {
        let user = self.user_repo
            .delete(id)
            .ok_or_else(|| Self::not_found(id))?;
        log::info!("사용자 삭제 완료: id={}", id);

        Ok(user)
    }

    fn not_found(id: UserId) -> AppError {
        log::warn!("사용자를 찾을 수 없음: id={}", id);
        AppError::NotFound(format!("사용자를 찾을 수 없습니다 (id={})", id))
    }
}

fn user_service_constructor() -> AppResult<Component> {
    Ok(UserService::instance()? as Component)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "user_service",
        type_id: TypeId::of::<UserService>,
        constructor: user_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> UserService {
        UserService::new(Arc::new(UserRepository::new()))
    }

    #[test]
    fn test_create_then_get() {
        let service = service();
        let created = service.create_user(CreateUserRequest::named("A")).unwrap();

        assert_eq!(service.get_user(created.id).unwrap(), created);
    }

    #[test]
    fn test_get_missing_user_is_not_found() {
        let service = service();

        assert!(matches!(service.get_user(0), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_update_missing_user_is_not_found() {
        let service = service();
        service.create_user(CreateUserRequest::named("A")).unwrap();

        let result = service.update_user(99, UpdateUserRequest::rename("X"));

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(service.list_users().unwrap()[0].name, "A");
    }

    #[test]
    fn test_delete_returns_removed_user_then_not_found() {
        let service = service();
        let created = service.create_user(CreateUserRequest::named("A")).unwrap();

        assert_eq!(service.delete_user(created.id).unwrap(), created);
        assert!(matches!(service.delete_user(created.id), Err(AppError::NotFound(_))));
        assert!(matches!(service.get_user(created.id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_list_users_in_creation_order() {
        let service = service();
        for name in ["A", "B", "C"] {
            service.create_user(CreateUserRequest::named(name)).unwrap();
        }

        let names: Vec<String> = service.list_users().unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_instance_resolves_registered_repository() {
        ServiceLocator::set(Arc::new(UserRepository::new()));

        let first = UserService::instance().unwrap();
        let second = UserService::instance().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }
}
