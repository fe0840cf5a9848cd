//! # Domain Layer
//!
//! 사용자 리소스의 도메인 모델을 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← 저장소가 보관하는 User 엔티티
//! └── dto/        ← 생성/수정 요청 본문
//! ```

pub mod entities;
pub mod dto;

pub use entities::users::{User, UserId};
pub use dto::users::{CreateUserRequest, UpdateUserRequest};
