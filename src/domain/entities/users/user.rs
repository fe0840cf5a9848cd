//! User Entity Implementation
//!
//! 저장소에 보관되는 사용자 엔티티입니다.
//! `id`는 저장소가 부여하며, 나머지 속성은 요청 DTO에서 병합됩니다.

use serde::{Deserialize, Serialize};
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};

/// 사용자 식별자
///
/// 저장소가 0부터 순서대로 부여하며 삭제 후에도 재사용되지 않습니다.
pub type UserId = u64;

/// 사용자 엔티티
///
/// 값이 없는 선택 속성은 JSON에서 생략됩니다.
///
/// ```json
/// { "id": 0, "name": "A" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// 부여된 ID와 생성 요청으로 새 사용자를 만듭니다.
    pub fn new(id: UserId, request: CreateUserRequest) -> Self {
        let CreateUserRequest { name, email, phone } = request;

        Self {
            id,
            name,
            email,
            phone,
        }
    }

    /// 부분 수정 요청을 병합합니다.
    ///
    /// 요청에 포함된 필드만 덮어쓰고, 나머지 필드와 `id`는 그대로 둡니다.
    pub fn apply(&mut self, changes: UpdateUserRequest) {
        let UpdateUserRequest { name, email, phone } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = Some(email);
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
    }
}
