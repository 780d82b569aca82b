//! neo_backend 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 컴포넌트를 초기화합니다.
//! MongoDB, Redis 연결과 선택적인 SMTP 메일 발송을 설정합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use neo_backend::caching::redis::RedisClient;
use neo_backend::config::{CacheConfig, MailConfig, RateLimitConfig, ServerConfig};
use neo_backend::db::Database;
use neo_backend::errors::{AppError, ErrorContext};
use neo_backend::repositories::{
    addresses::AddressRepository, user_details::UserDetailRepository, users::UserRepository,
};
use neo_backend::routes::configure_all_routes;
use neo_backend::services::{
    addresses::AddressService,
    mail::{MailService, SmtpMailSender},
    user_details::UserDetailService,
    users::UserService,
};
use neo_backend::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 핸들러와 공유되는 서비스 묶음
struct AppServices {
    redis: Arc<RedisClient>,
    users: Arc<UserService>,
    addresses: Arc<AddressService>,
    user_details: Arc<UserDetailService>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 로거를 먼저 띄워야 설정 파일 로드 결과가 남음
    init_logging();
    load_env_file();

    print_boxed_title("neo_backend");
    info!("🚀 neo_backend 시작중...");

    let services = initialize_components().await.map_err(|e| {
        error!("초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 컴포넌트가 성공적으로 초기화되었습니다!");

    start_http_server(services).await
}

/// 데이터 스토어, 리포지토리, 서비스를 순서대로 구성합니다.
async fn initialize_components() -> Result<AppServices, AppError> {
    print_step_start(1, "Connecting data stores");
    let (database, redis) = initialize_data_stores().await?;
    print_step_complete(1, "Data stores connected", 2);

    print_step_start(2, "Preparing repositories");
    let user_repo = Arc::new(UserRepository::new(database.clone(), redis.clone()));
    let address_repo = Arc::new(AddressRepository::new(database.clone(), redis.clone()));
    let detail_repo = Arc::new(UserDetailRepository::new(database.clone(), redis.clone()));

    report_indexes("UserRepository", user_repo.create_indexes().await);
    report_indexes("AddressRepository", address_repo.create_indexes().await);
    report_indexes("UserDetailRepository", detail_repo.create_indexes().await);
    print_step_complete(2, "Repositories ready", 3);

    print_step_start(3, "Wiring services");
    let mail = initialize_mail();
    print_sub_task("MailService", if mail.is_some() { "enabled" } else { "disabled" });

    let services = AppServices {
        redis,
        users: Arc::new(UserService::new(user_repo, mail)),
        addresses: Arc::new(AddressService::new(address_repo)),
        user_details: Arc::new(UserDetailService::new(detail_repo)),
    };
    print_step_complete(3, "Services ready", 3);

    print_final_summary(3, 3);

    Ok(services)
}

fn report_indexes(name: &str, result: Result<(), AppError>) {
    match result {
        Ok(()) => print_sub_task(name, "indexes OK"),
        Err(e) => {
            warn!("{} 인덱스 생성 실패: {}", name, e);
            print_sub_task(name, "indexes FAILED");
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(services: AppServices) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
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

    let redis = web::Data::from(services.redis);
    let users = web::Data::from(services.users);
    let addresses = web::Data::from(services.addresses);
    let user_details = web::Data::from(services.user_details);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(redis.clone())
            .app_data(users.clone())
            .app_data(addresses.clone())
            .app_data(user_details.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
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

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=neo_backend::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다
async fn initialize_data_stores() -> Result<(Arc<Database>, Arc<RedisClient>), AppError> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| AppError::DatabaseError(format!("데이터베이스 연결 실패: {}", e)))?;
    print_sub_task("MongoDB", database.database_name());

    let redis_url = CacheConfig::redis_url();
    let redis_client = RedisClient::new(&redis_url)
        .await
        .map_err(|e| AppError::RedisError(format!("Redis 연결 실패: {}", e)))?;
    print_sub_task("Redis", &redis_url);

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// `MAIL_ENABLED`일 때만 SMTP 메일 서비스를 만듭니다.
///
/// 트랜스포트 구성에 실패해도 서버는 메일 없이 기동합니다.
fn initialize_mail() -> Option<Arc<MailService>> {
    if !MailConfig::enabled() {
        info!("메일 발송 비활성화 (MAIL_ENABLED=false)");
        return None;
    }

    match SmtpMailSender::from_config().context("SMTP 트랜스포트 구성 실패") {
        Ok(sender) => Some(Arc::new(MailService::new(Arc::new(sender), MailConfig::from_address()))),
        Err(e) => {
            warn!("{}. 메일 없이 계속합니다", e);
            None
        }
    }
}

/// CORS 설정을 구성합니다
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "DELETE", "PATCH", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
