//! 사용자 생성 요청 DTO
//!
//! 클라이언트가 제공하는 사용자 속성입니다. `id`는 포함하지 않으며,
//! 본문에 `id`가 있더라도 역직렬화 과정에서 무시됩니다.
use serde::{Deserialize, Serialize};

/// `POST /api/v1/users` 요청 본문
///
/// ```json
/// { "name": "Alice", "email": "alice@example.com" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CreateUserRequest {
    /// 이름만 가진 요청을 만듭니다.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
        }
    }
}
