//! # Address HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/addresses` | 주소 생성 | 201 Created |
//! | `GET` | `/addresses?user_id=` | 소유자별 주소 목록 | 200 OK |
//! | `GET` | `/addresses/{id}` | 주소 조회 | 200 OK |
//! | `PATCH` | `/addresses/{id}` | 부분 수정 (전부 반영되거나 전혀 반영되지 않음) | 200 OK |
//! | `DELETE` | `/addresses/{id}` | 주소 삭제 | 204 No Content |
//!
//! 필드 불변식 위반은 필드 이름을 포함한 400 응답이 됩니다.
//!
//! ```json
//! { "error": "Validation error: Province cannot be null or empty" }
//! ```

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;

use crate::domain::dto::addresses::{AddressListQuery, CreateAddressRequest, UpdateAddressRequest};
use crate::errors::AppError;
use crate::services::addresses::AddressService;

#[post("")]
pub async fn create_address(
    service: web::Data<AddressService>,
    payload: web::Json<CreateAddressRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let address = service.create_address(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(address))
}

#[get("")]
pub async fn list_addresses(
    service: web::Data<AddressService>,
    query: web::Query<AddressListQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let addresses = service.list_addresses(query.user_id).await?;

    Ok(HttpResponse::Ok().json(addresses))
}

#[get("/{address_id}")]
pub async fn get_address(
    service: web::Data<AddressService>,
    address_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let address = service.get_address(&address_id).await?;

    Ok(HttpResponse::Ok().json(address))
}

/// 주소 부분 수정
///
/// 주어진 필드만 바꾸며, 하나라도 불변식을 어기면 아무것도 바뀌지 않습니다.
#[patch("/{address_id}")]
pub async fn update_address(
    service: web::Data<AddressService>,
    address_id: web::Path<String>,
    payload: web::Json<UpdateAddressRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let address = service.update_address(&address_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(address))
}

#[delete("/{address_id}")]
pub async fn delete_address(
    service: web::Data<AddressService>,
    address_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_address(&address_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
