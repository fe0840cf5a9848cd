//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `inventory::submit!`으로 레지스트리에 등록되고,
//! 시작 시 `ServiceLocator::initialize_all()`에서 생성됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - 저장소의 부재 표현을 HTTP 친화적인 에러로 변환

pub mod users;
