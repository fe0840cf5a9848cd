//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 핵심 기능을 제공합니다.
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입 기반 전역 컴포넌트 컨테이너
//! - **자동 등록**: `inventory` 기반 서비스 수집 및 시작 시 일괄 생성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 에러를 컨텍스트와 함께 변환
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! // 1. 저장소 생성 (단일 생성 지점)
//! ServiceLocator::set(Arc::new(UserRepository::new()));
//!
//! // 2. 등록된 서비스 일괄 생성
//! ServiceLocator::initialize_all()?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
