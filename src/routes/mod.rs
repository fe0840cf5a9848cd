//! # Routes Configuration
//!
//! 모든 HTTP 엔드포인트를 `web::ServiceConfig`에 등록합니다.
//! 핸들러가 사용하는 `web::Data<UserService>`는 호출 측에서 `app_data`로 넣어야 합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::from(UserService::instance()?))
//!     .configure(configure_all_routes)
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 추출기 에러 → 400 ValidationError
    cfg.app_data(handlers::json_config())
        .app_data(handlers::path_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_store_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": "in-memory",
            "dependency_injection": "Service Locator"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check_reports_healthy() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["features"]["storage"], "in-memory");
    }
}
