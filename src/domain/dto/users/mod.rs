//! 사용자 관련 DTO
//!
//! HTTP 요청 본문의 형태를 정의합니다. 응답은 [`User`](crate::domain::entities::users::user::User)
//! 엔티티를 그대로 직렬화합니다.

pub mod request;

pub use request::*;
