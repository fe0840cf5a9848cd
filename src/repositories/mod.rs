//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 인메모리 저장소이며 `Arc`로 공유됩니다.
//! 생성은 `main`에서 명시적으로 한 번만 이루어집니다.

pub mod users;
