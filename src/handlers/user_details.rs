//! # UserDetail HTTP Handlers
//!
//! 응답의 `user_id`와 `last_login_ip`는 항상 마스킹되어 있습니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/user-details` | 상세 정보 생성 |
//! | `GET` | `/user-details/{user_id}` | 조회 |
//! | `PATCH` | `/user-details/{user_id}/status` | 상태 변경 (`ACTIVE`, `INACTIVE`, `SUSPENDED`) |
//! | `DELETE` | `/user-details/{user_id}` | 삭제 |

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;

use crate::domain::dto::user_details::{CreateUserDetailRequest, UpdateStatusRequest};
use crate::errors::AppError;
use crate::services::user_details::UserDetailService;

#[post("")]
pub async fn create_user_detail(
    service: web::Data<UserDetailService>,
    payload: web::Json<CreateUserDetailRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let detail = service.create_detail(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(detail))
}

#[get("/{user_id}")]
pub async fn get_user_detail(
    service: web::Data<UserDetailService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let detail = service.get_detail(&user_id).await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// 상태 변경
///
/// 상태 이름은 대소문자까지 정확히 일치해야 합니다.
///
/// ```bash
/// curl -X PATCH http://localhost:8080/api/v1/user-details/user-000123/status \
///   -H "Content-Type: application/json" \
///   -d '{"status": "SUSPENDED"}'
/// ```
#[patch("/{user_id}/status")]
pub async fn change_status(
    service: web::Data<UserDetailService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let detail = service.change_status(&user_id, &payload.status).await?;

    Ok(HttpResponse::Ok().json(detail))
}

#[delete("/{user_id}")]
pub async fn delete_user_detail(
    service: web::Data<UserDetailService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_detail(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
