//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 연결하는 핸들러 함수들입니다.
//! Spring MVC의 Controller 레이어에 해당합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 부재 → 404 변환, 로깅              ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 인메모리 사용자 목록            ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 추출기 에러 처리
//!
//! JSON 본문이나 경로 파라미터를 파싱하지 못하면 actix 기본 응답 대신
//! [`AppError::ValidationError`]로 변환하여 400과 `{"error": ...}` 본문을 돌려줍니다.

pub mod users;

use actix_web::{error, web, HttpRequest};
use crate::core::errors::AppError;

/// JSON 본문 파싱 실패를 400 응답으로 변환하는 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// 경로 파라미터 파싱 실패를 400 응답으로 변환하는 설정
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("잘못된 JSON 본문: {} {} - {}", req.method(), req.path(), err);
    AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
}

fn path_error_handler(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("잘못된 경로 파라미터: {} - {}", req.path(), err);
    AppError::ValidationError(format!("잘못된 경로 파라미터입니다: {}", err)).into()
}
