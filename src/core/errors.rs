//! # Application Error Handling System
//!
//! 사용자 저장소 서비스의 통합 에러 처리 시스템입니다.
//! 저장소 계층은 "찾을 수 없음"을 `Option::None`으로만 표현하고,
//! 서비스/HTTP 계층에서 이를 [`AppError`]로 변환하여 일관된 JSON 응답을 만듭니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 JSON 본문, 숫자가 아닌 ID 경로 |
//! | `NotFound` | 404 Not Found | 존재하지 않거나 이미 삭제된 사용자 ID |
//! | `InternalError` | 500 Internal Server Error | 컴포넌트 등록 누락 등 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Not found: 사용자를 찾을 수 없습니다 (id=42)" }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 전파하면 곧바로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 파싱 실패 (400 Bad Request)
    ///
    /// 값의 형식 규칙을 검사하지는 않습니다. JSON 본문이나 경로 파라미터가
    /// 기대한 타입으로 역직렬화되지 않을 때만 사용됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 없음 (404 Not Found)
    ///
    /// ```rust,ignore
    /// let user = user_repo.find_by_id(id)
    ///     .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다 (id={})", id)))?;
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 모든 에러를 `{"error": "..."}` 형태의 JSON으로 응답합니다.
    ///
    /// 5xx 에러는 서버 로그에도 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러를 `AppError::InternalError`로 감싸는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let governor = builder.finish().ok_or("invalid config").context("Rate limiter 구성 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 고정된 컨텍스트 메시지와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저로 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
