//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users` | 사용자 목록 (페이지, 닉네임 필터) | 200 OK |
//! | `GET` | `/users/slice` | 닉네임 + 이메일 슬라이스 조회 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `GET` | `/users/lookup/{login}` | 사용자명 또는 이메일로 조회 | 200 OK |
//! | `PATCH` | `/users/{id}/user-name` | 사용자명 변경 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! 요청 DTO는 핸들러에서 `validator`로 먼저 검증한 뒤 서비스로 넘깁니다.

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;

use crate::domain::dto::users::request::{
    CreateUserRequest, ModifyUserNameRequest, UserListQuery, UserSliceQuery,
};
use crate::errors::AppError;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "user_name": "neo",
///   "email": "neo@example.com",
///   "password": "SecurePass123",
///   "nick_name": "smile"
/// }
/// ```
///
/// # 응답
///
/// - 201 Created: 생성된 사용자와 메시지
/// - 400 Bad Request: 검증 실패
/// - 409 Conflict: 이메일 또는 사용자명 중복
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 목록 조회 핸들러
///
/// ```bash
/// curl "http://localhost:8080/api/v1/users?page=0&size=10&nick_name=smile"
/// ```
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let page = service.list_users(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 닉네임과 이메일로 슬라이스 조회
///
/// 전체 건수 없이 `has_next`만 돌려줍니다.
#[get("/slice")]
pub async fn slice_users(
    service: web::Data<UserService>,
    query: web::Query<UserSliceQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let slice = service.slice_users(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(slice))
}

#[get("/lookup/{login}")]
pub async fn get_user_by_login(
    service: web::Data<UserService>,
    login: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_login(&login).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 조회 핸들러
///
/// 비밀번호 해시는 응답에 포함되지 않습니다.
///
/// - 404 Not Found: 사용자 없음
/// - 400 Bad Request: 잘못된 ID 형식
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자명 변경 핸들러
///
/// 트랜잭션 안에서 실행되며 30초 안에 끝나지 않으면 실패합니다.
#[patch("/{user_id}/user-name")]
pub async fn modify_user_name(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<ModifyUserNameRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service.modify_user_name(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// 물리적 삭제(Hard Delete)이며 복구가 불가능합니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
