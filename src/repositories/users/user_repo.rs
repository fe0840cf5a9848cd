//! # 사용자 리포지토리 구현
//!
//! 프로세스 메모리에 사용자 레코드를 보관하는 리포지토리입니다.
//! 영구 저장은 하지 않으며 프로세스 종료 시 모든 데이터가 사라집니다.
//!
//! ## 저장 구조
//!
//! ```text
//! UserRepository
//! └── RwLock<UserTable>
//!     ├── users: Vec<User>   ← 생성 순서 그대로 유지, 재정렬 없음
//!     └── next_id: UserId    ← 단조 증가, 삭제 후에도 되돌리지 않음
//! ```
//!
//! 사용자 목록과 ID 카운터를 하나의 락으로 묶어, 다섯 가지 연산이 각각
//! 원자적으로 실행됩니다. 모든 연산은 O(n) 선형 탐색입니다.
//!
//! ## 부재 표현
//!
//! 조회/수정/삭제 대상이 없으면 `None`을 반환합니다. 이를 404 등으로
//! 변환하는 것은 [`UserService`](crate::services::users::user_service::UserService)의 몫입니다.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::domain::{
    dto::users::request::{CreateUserRequest, UpdateUserRequest},
    entities::users::user::{User, UserId},
};

#[derive(Debug, Default)]
struct UserTable {
    users: Vec<User>,
    next_id: UserId,
}

impl UserTable {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }
}

/// 인메모리 사용자 저장소
///
/// 여러 actix 워커가 `Arc<UserRepository>`로 공유합니다.
///
/// ```rust,ignore
/// let repo = UserRepository::new();
/// let alice = repo.create(CreateUserRequest::named("Alice"));
/// assert_eq!(repo.find_by_id(alice.id), Some(alice));
/// ```
#[derive(Debug, Default)]
pub struct UserRepository {
    table: RwLock<UserTable>,
}

impl UserRepository {
    /// 비어 있는 저장소를 만듭니다. 첫 번째 사용자의 ID는 0입니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 사용자를 추가합니다.
    ///
    /// 현재 카운터 값을 ID로 부여한 뒤 카운터를 1 증가시키고,
    /// 목록 끝에 추가합니다. 실패하지 않습니다.
    pub fn create(&self, request: CreateUserRequest) -> User {
        let mut table = self.write();

        let id = table.next_id;
        table.next_id += 1;

        let user = User::new(id, request);
        table.users.push(user.clone());

        log::debug!("사용자 추가: id={}, total={}", id, table.users.len());
        user
    }

    /// 모든 사용자를 생성 순서대로 복사하여 반환합니다.
    ///
    /// 반환된 벡터를 수정해도 저장소에는 영향이 없습니다.
    pub fn find_all(&self) -> Vec<User> {
        self.read().users.clone()
    }

    pub fn find_by_id(&self, id: UserId) -> Option<User> {
        self.read()
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    /// 사용자 속성을 부분 수정합니다.
    ///
    /// 요청에 있는 필드만 덮어쓰며 목록 내 위치와 `id`는 바뀌지 않습니다.
    /// 대상이 없으면 `None`을 반환하고 저장소는 변경되지 않습니다.
    pub fn update(&self, id: UserId, changes: UpdateUserRequest) -> Option<User> {
        let mut table = self.write();
        let index = table.position(id)?;

        let user = &mut table.users[index];
        user.apply(changes);

        Some(user.clone())
    }

    /// 사용자를 삭제하고, 삭제 직전의 레코드를 반환합니다.
    ///
    /// 뒤쪽 레코드들은 한 칸씩 당겨지며, 삭제된 ID는 다시 부여되지 않습니다.
    pub fn delete(&self, id: UserId) -> Option<User> {
        let mut table = self.write();
        let index = table.position(id)?;

        let removed = table.users.remove(index);
        log::debug!("사용자 삭제: id={}, remaining={}", id, table.users.len());

        Some(removed)
    }

    /// 현재 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // 연산 도중 패닉이 나더라도 테이블은 항상 일관된 상태이므로 poison은 무시합니다.
    fn read(&self) -> RwLockReadGuard<'_, UserTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}
