//! 도메인 엔티티
//!
//! 저장소에 실제로 보관되는 레코드 타입입니다.

pub mod users;
