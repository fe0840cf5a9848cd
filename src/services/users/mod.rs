//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성, 목록/단건 조회, 부분 수정, 삭제를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::user_service::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::instance()?;
//! let user = user_service.create_user(CreateUserRequest::named("Alice"))?;
//! ```

pub mod user_service;
