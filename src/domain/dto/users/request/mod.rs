//! 사용자 요청 DTO 모듈
//!
//! - [`CreateUserRequest`]: 생성 시 필요한 속성 (`name` 필수)
//! - [`UpdateUserRequest`]: 부분 수정 시 바꿀 속성 (모두 선택)

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
