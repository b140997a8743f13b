//! 세션 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 컴포넌트를 초기화합니다.
//! MongoDB(사용자), Redis(세션 레코드) 연결을 설정하고 쿠키 기반 인증 API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use session_auth_backend::caching::redis::RedisClient;
use session_auth_backend::config::{AuthConfig, ServerConfig, StorageConfig};
use session_auth_backend::core::registry::ServiceLocator;
use session_auth_backend::db::Database;
use session_auth_backend::repositories::sessions::SessionRepository;
use session_auth_backend::repositories::users::UserRepository;
use session_auth_backend::routes::configure_all_routes;
use session_auth_backend::services::auth::SessionService;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(path) => info!("환경 파일 로드 됨: {}", path),
        Err(e) => warn!("환경 파일 로드 실패, 프로세스 환경 변수만 사용: {}", e),
    }

    info!("🚀 세션 인증 서비스 시작중...");

    // 인증 설정은 저장소 연결 전에 검증 (비밀키 누락 시 즉시 종료)
    let auth_config = AuthConfig::from_env().map_err(|e| {
        error!("인증 설정 오류: {}", e);
        io::Error::other(e.to_string())
    })?;

    // 데이터 스토어 초기화
    let (database, redis_client) = initialize_data_stores().await?;

    // ServiceLocator에 인프라 등록
    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let users = UserRepository::instance();
    users.create_indexes().await.map_err(|e| {
        error!("사용자 인덱스 생성 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let session_service = web::Data::new(SessionService::new(
        auth_config,
        users,
        SessionRepository::instance(),
    ));

    info!("✅ 모든 컴포넌트가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(session_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(session_service: web::Data<SessionService>) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Auth API: http://{}/api/auth", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = ServerConfig::allowed_origins();
    info!("CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        App::new()
            .app_data(session_service.clone())

            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과를 반환하고 로그는 호출자가 남깁니다.
fn load_env_file() -> Result<String, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod".to_string()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev".to_string()),
        _ => dotenv::dotenv().map(|path| path.display().to_string()),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=session_auth_backend=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB와 Redis 연결을 초기화합니다
///
/// 둘 중 하나라도 연결에 실패하면 서버를 시작하지 않습니다.
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(&StorageConfig::mongo_uri(), &StorageConfig::database_name())
        .await
        .map_err(|e| {
            error!("MongoDB 연결 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    let redis_client = RedisClient::new(&StorageConfig::redis_url())
        .await
        .map_err(|e| {
            error!("Redis 연결 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// CORS 설정을 구성합니다
///
/// 쿠키를 주고받으므로 명시적인 Origin 목록과 `supports_credentials()`를 사용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 자격 증명(쿠키) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
