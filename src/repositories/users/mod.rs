//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)가 프로세스 메모리에 사용자 목록과
//! ID 카운터를 보관합니다. `main`에서 한 번 생성되어 `ServiceLocator`에 등록됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let repo = UserRepository::new();
//! let user = repo.create(CreateUserRequest::named("Alice"));
//! ```

pub mod user_repo;
