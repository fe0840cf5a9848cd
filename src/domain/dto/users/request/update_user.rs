//! 사용자 부분 수정 요청 DTO
use serde::{Deserialize, Serialize};

/// `PATCH /api/v1/users/{id}` 요청 본문
///
/// 모든 필드가 선택적입니다. `None`인 필드는 "변경 없음"을 뜻하며,
/// 빈 객체 `{}`는 아무것도 바꾸지 않습니다. `id` 필드는 존재하지 않으므로
/// 클라이언트가 보내더라도 식별자는 바뀌지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateUserRequest {
    /// 이름만 바꾸는 요청을 만듭니다.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// 변경할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}
