//! # User Profile Service
//!
//! 프로필 집계/조정 서비스의 실행 진입점입니다.
//!
//! ## 부팅 순서
//!
//! ```text
//! 1. 환경 파일 로드 (PROFILE=dev|prod)
//! 2. 로깅 초기화 (RUST_LOG, 기본값 info,actix_web=debug)
//! 3. MongoDB / Redis 연결 → ServiceLocator::set
//! 4. ServiceLocator::initialize_all → 리포지토리/서비스 생성
//! 5. 컬렉션 인덱스 생성
//! 6. ProfileService 조립 및 등록
//! 7. HTTP 서버 시작 (Governor, CORS, Logger, NormalizePath)
//! ```

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_profile_service::caching::redis::RedisClient;
use user_profile_service::config::{Environment, RateLimitConfig, ServerConfig, SyncConfig};
use user_profile_service::core::registry::ServiceLocator;
use user_profile_service::db::Database;
use user_profile_service::repositories::profiles::{AuthLinkRepository, EmailRepository, ProfileRepository};
use user_profile_service::repositories::tags::TagRepository;
use user_profile_service::routes::configure_all_routes;
use user_profile_service::services::profiles::ProfileService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 사용자 프로필 서비스 시작중... (환경: {:?})", Environment::current());

    let (database, redis_client) = initialize_data_stores().await?;

    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| io::Error::other(format!("서비스 초기화 실패: {}", e)))?;

    create_indexes().await?;

    ServiceLocator::set(Arc::new(ProfileService::from_registry()));
    info!(
        "✅ 모든 서비스가 초기화되었습니다 (인증 연결 삭제 동시성: {})",
        SyncConfig::deletion_concurrency()
    );

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let profile_service = web::Data::from(ServiceLocator::get::<ProfileService>());

    HttpServer::new(move || {
        App::new()
            .app_data(profile_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
    info!("Current profile: {}", std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()));
}

/// MongoDB와 Redis 연결을 초기화합니다
///
/// # Errors
///
/// * 연결 또는 ping 실패 시 `io::Error`
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;
    database
        .ping()
        .await
        .map_err(|e| io::Error::other(format!("MongoDB ping 실패: {}", e)))?;

    info!("✅ MongoDB 연결 성공: {}", database.database_name());

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| io::Error::other(format!("Redis 연결 실패: {}", e)))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// 프로필, 인증 연결, 이메일, 태그 컬렉션의 인덱스를 생성합니다
async fn create_indexes() -> io::Result<()> {
    let results = [
        ("users", ProfileRepository::instance().create_indexes().await),
        ("user_auths", AuthLinkRepository::instance().create_indexes().await),
        ("user_emails", EmailRepository::instance().create_indexes().await),
        ("tags", TagRepository::instance().create_indexes().await),
    ];

    for (collection, result) in results {
        if let Err(e) = result {
            error!("❌ {} 인덱스 생성 실패: {}", collection, e);
            return Err(io::Error::other(e.to_string()));
        }
        info!("   ├─ {} 인덱스 준비 완료", collection);
    }

    Ok(())
}

/// CORS 설정
///
/// * `http://localhost:3000`, `http://127.0.0.1:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080`, `http://127.0.0.1:8080` - 자체 서버
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "PUT", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
