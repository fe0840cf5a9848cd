//! Data Transfer Objects
//!
//! 클라이언트와 주고받는 요청 데이터 구조입니다.
//! 필드 값의 형식 규칙은 검사하지 않고, serde 역직렬화로 형태만 보장합니다.

pub mod users;

pub use users::*;
