//! # User Management HTTP Handlers
//!
//! 사용자 리소스의 CRUD 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/api/v1/users` | 전체 사용자 목록 | 200 OK |
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 | 200 OK / 404 |
//! | `PATCH` | `/api/v1/users/{id}` | 사용자 부분 수정 | 200 OK / 404 |
//! | `DELETE` | `/api/v1/users/{id}` | 사용자 삭제 (삭제된 레코드 반환) | 200 OK / 404 |
//!
//! [`UserService`]는 `web::Data`로 주입됩니다.

use actix_web::{web, HttpResponse, get, post, patch, delete};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::entities::users::user::UserId;
use crate::services::users::user_service::UserService;

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(payload.into_inner())?;

    Ok(HttpResponse::Created().json(user))
}

#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users()?;

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(user_id.into_inner())?;

    Ok(HttpResponse::Ok().json(user))
}

#[patch("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<UserId>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.update_user(user_id.into_inner(), payload.into_inner())?;

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, AppError> {
    let removed = service.delete_user(user_id.into_inner())?;

    Ok(HttpResponse::Ok().json(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{test, App, http::StatusCode};
    use serde_json::{json, Value};
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::user_repo::UserRepository;
    use crate::routes::configure_all_routes;

    fn service_data() -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(UserRepository::new())))
    }

    #[actix_web::test]
    async fn test_create_returns_201_with_assigned_id() {
        let app = test::init_service(
            App::new()
                .app_data(service_data())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "name": "A" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "id": 0, "name": "A" }));
    }

    #[actix_web::test]
    async fn test_crud_flow_over_http() {
        let app = test::init_service(
            App::new()
                .app_data(service_data())
                .configure(configure_all_routes),
        )
        .await;

        for name in ["A", "B"] {
            let req = test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "name": name }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::patch()
            .uri("/api/v1/users/0")
            .set_json(json!({ "id": 5, "name": "A2" }))
            .to_request();
        let updated: User = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, 0);
        assert_eq!(updated.name, "A2");

        let req = test::TestRequest::delete().uri("/api/v1/users/0").to_request();
        let removed: User = test::call_and_read_body_json(&app, req).await;
        assert_eq!(removed.name, "A2");

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let users: Vec<User> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "name": "C" }))
            .to_request();
        let created: User = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.id, 2);
    }

    #[actix_web::test]
    async fn test_missing_user_returns_404_json_error() {
        let app = test::init_service(
            App::new()
                .app_data(service_data())
                .configure(configure_all_routes),
        )
        .await;

        for req in [
            test::TestRequest::get().uri("/api/v1/users/99").to_request(),
            test::TestRequest::patch()
                .uri("/api/v1/users/99")
                .set_json(json!({ "name": "X" }))
                .to_request(),
            test::TestRequest::delete().uri("/api/v1/users/99").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);

            let body: Value = test::read_body_json(resp).await;
            assert!(body["error"].as_str().unwrap().contains("99"));
        }
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(service_data())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(service_data())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "email": "no-name@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
    }
}
