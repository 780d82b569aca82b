//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(user_service.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use log::warn;
use serde_json::json;

use crate::caching::redis::RedisClient;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_address_routes(cfg);
    configure_user_detail_routes(cfg);
}

/// 사용자 관련 라우트
///
/// 고정 경로(`/slice`, `/lookup/{login}`)는 `/{user_id}`보다 먼저 등록해야 합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::slice_users)
            .service(handlers::users::get_user_by_login)
            .service(handlers::users::get_user)
            .service(handlers::users::modify_user_name)
            .service(handlers::users::delete_user)
    );
}

fn configure_address_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/addresses")
            .service(handlers::addresses::create_address)
            .service(handlers::addresses::list_addresses)
            .service(handlers::addresses::get_address)
            .service(handlers::addresses::update_address)
            .service(handlers::addresses::delete_address)
    );
}

fn configure_user_detail_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/user-details")
            .service(handlers::user_details::create_user_detail)
            .service(handlers::user_details::get_user_detail)
            .service(handlers::user_details::change_status)
            .service(handlers::user_details::delete_user_detail)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Redis가 등록되어 있으면 `PING` 결과를 함께 보고합니다.
/// 캐시 장애는 서비스 장애가 아니므로 상태 코드는 항상 200입니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "neo_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "cache": "up"
/// }
/// ```
#[get("/health")]
async fn health_check(redis: Option<web::Data<RedisClient>>) -> HttpResponse {
    let cache = match redis {
        Some(redis) => match redis.ping().await {
            Ok(()) => "up",
            Err(e) => {
                warn!("헬스체크 Redis PING 실패: {}", e);
                "down"
            }
        },
        None => "unconfigured",
    };

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "cache": cache,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_without_cache() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "neo_backend");
        assert_eq!(body["cache"], "unconfigured");
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/unknown").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
