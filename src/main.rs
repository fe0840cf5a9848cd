//! 사용자 저장소 서비스 메인 애플리케이션
//!
//! Actix-web 기반 HTTP 서버를 구동합니다.
//! 인메모리 사용자 저장소를 한 번 생성해 레지스트리에 등록하고,
//! 등록된 서비스를 초기화한 뒤 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_store_service::config::{Profile, RateLimitConfig, ServerConfig};
use user_store_service::core::registry::ServiceLocator;
use user_store_service::repositories::users::user_repo::UserRepository;
use user_store_service::routes::configure_all_routes;
use user_store_service::services::users::user_service::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 저장소 서비스 시작중...");

    // 저장소는 여기서 한 번만 생성
    ServiceLocator::set(Arc::new(UserRepository::new()));

    let count = ServiceLocator::initialize_all().map_err(std::io::Error::other)?;
    info!("✅ {}개 서비스가 성공적으로 초기화되었습니다!", count);

    let user_service = UserService::instance().map_err(std::io::Error::other)?;

    let result = start_http_server(user_service).await;
    log_shutdown(&result);
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: Arc<UserService>) -> std::io::Result<()> {
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/v1/users", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other(format!(
            "잘못된 Rate Limiting 설정: {:?}", rate_limit_config
        )))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let user_service = web::Data::from(user_service);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(server_config.workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 stderr로 직접 출력합니다.
fn load_env_file() {
    let profile = Profile::current();

    match profile.env_file() {
        Some(file) => match dotenv::from_filename(file) {
            Ok(_) => eprintln!("Profile {:?}: {} 파일 로드 됨", profile, file),
            Err(e) => eprintln!("Profile {:?}: {} 파일 로드 실패: {}", profile, file, e),
        },
        None => {
            dotenv().ok();
            eprintln!("Profile {:?}: 기본 .env 파일 로드", profile);
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_store_service::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버(3000)와 자체 서버(8080)를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

fn log_shutdown(result: &std::io::Result<()>) {
    if let Err(e) = result {
        error!("서버 종료 중 오류: {}", e);
    }
}
