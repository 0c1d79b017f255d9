//! 소셜 피드 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 저장소 백엔드(MongoDB 또는 메모리)를 선택해 서비스 레지스트리를 조립한 뒤
//! 계정, 프로필, 게시물 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use social_feed_backend::config::{
    CorsConfig, DatabaseConfig, PasswordConfig, ServerConfig, StorageBackend, StorageConfig,
    TokenTransport,
};
use social_feed_backend::core::registry::ServiceRegistry;
use social_feed_backend::db::Database;
use social_feed_backend::repositories::Stores;
use social_feed_backend::routes::configure_all_routes;
use social_feed_backend::services::auth::TokenService;
use social_feed_backend::services::github::GithubService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 소셜 피드 백엔드 시작중...");

    // 데이터 스토어 초기화
    let stores = initialize_stores().await?;

    let registry = ServiceRegistry::new(
        stores,
        Arc::new(TokenService::from_env()),
        PasswordConfig::bcrypt_cost(),
        GithubService::from_env(),
    );

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(registry).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(registry: ServiceRegistry) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins, registry.tokens().transport());

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 서비스 및 라우트 설정
            .configure(|cfg| registry.configure(cfg))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => warn!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 저장소 백엔드를 초기화합니다
///
/// * `STORAGE_BACKEND=mongo` (기본값) - MongoDB 연결 및 인덱스 생성
/// * `STORAGE_BACKEND=memory` - 프로세스 메모리 (재시작 시 초기화)
async fn initialize_stores() -> std::io::Result<Stores> {
    match StorageConfig::backend() {
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중 - 재시작하면 데이터가 사라집니다");
            Ok(Stores::in_memory())
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name())
                .await
                .map_err(|e| {
                    error!("데이터베이스 연결 실패: {}", e);
                    std::io::Error::other(e.to_string())
                })?;

            info!("✅ MongoDB 연결 성공: {}", database.database_name());

            Stores::mongo(&database).await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                std::io::Error::other(e.to_string())
            })
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 헤더 전송 방식이면 토큰 헤더 이름을, 쿠키 방식이면 자격 증명을 허용합니다.
fn configure_cors(allowed_origins: &[String], transport: &TokenTransport) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600);

    match transport {
        TokenTransport::Header(name) => cors.allowed_header(name.as_str()),
        TokenTransport::Cookie { .. } => cors,
    }
}
