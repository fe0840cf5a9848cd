//! 사용자 저장소 서비스
//!
//! 프로세스 메모리에 사용자 레코드를 보관하는 CRUD 서비스입니다.
//! 자동 증가 ID, 생성 순서 유지, 부분 수정, 삭제 후 ID 재사용 금지를 보장하며
//! actix-web 기반 REST API로 노출합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 목록/단건 조회, 부분 수정, 삭제
//! - **동시성 안전**: 사용자 목록과 ID 카운터를 하나의 `RwLock`으로 보호
//! - **서비스 레지스트리**: `inventory` 기반 서비스 등록과 타입 기반 조회
//! - **영구 저장 없음**: 프로세스 종료 시 데이터 소멸
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 부재 → NotFound 변환, 로깅
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 인메모리 사용자 목록 + ID 카운터
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_store_service::domain::{CreateUserRequest, UpdateUserRequest};
//! use user_store_service::repositories::users::user_repo::UserRepository;
//!
//! let repo = UserRepository::new();
//! let a = repo.create(CreateUserRequest::named("A"));   // id = 0
//! repo.update(a.id, UpdateUserRequest::rename("A2"));
//! repo.delete(a.id);
//! let c = repo.create(CreateUserRequest::named("C"));   // id = 1, 0은 재사용되지 않음
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
