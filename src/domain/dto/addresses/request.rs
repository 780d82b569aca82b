//! 주소 요청 DTO
//!
//! HTTP 경계에서는 `user_id`가 양수인지만 `validator`로 확인하고,
//! 문자열 필드의 불변식은 [`Address`] 엔티티가 직접 검증합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::addresses::{Address, AddressPatch};
use crate::domain::entities::guards::{require_present, FieldViolation};

/// 주소 생성 요청
///
/// 누락된 필드를 엔티티 검증 메시지로 보고할 수 있도록 모든 필드가 `Option`입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateAddressRequest {
    #[validate(range(min = 1, message = "User ID must be positive"))]
    pub user_id: Option<i64>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
}

impl TryFrom<CreateAddressRequest> for Address {
    type Error = FieldViolation;

    fn try_from(request: CreateAddressRequest) -> Result<Self, Self::Error> {
        let user_id = require_present("User ID", request.user_id)?;
        let province = request.province.ok_or(FieldViolation::Blank { field: "Province" })?;
        let city = request.city.ok_or(FieldViolation::Blank { field: "City" })?;
        let street = request.street.ok_or(FieldViolation::Blank { field: "Street" })?;

        Address::new(user_id, province, city, street)
    }
}

/// 주소 부분 수정 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAddressRequest {
    #[validate(range(min = 1, message = "User ID must be positive"))]
    pub user_id: Option<i64>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
}

impl From<UpdateAddressRequest> for AddressPatch {
    fn from(request: UpdateAddressRequest) -> Self {
        Self {
            user_id: request.user_id,
            province: request.province,
            city: request.city,
            street: request.street,
        }
    }
}

/// 소유자별 주소 목록 조회 쿼리
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddressListQuery {
    #[validate(range(min = 1, message = "User ID must be positive"))]
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateAddressRequest {
        CreateAddressRequest {
            user_id: Some(1),
            province: Some("경기도".to_string()),
            city: Some("성남시".to_string()),
            street: Some("판교역로 235".to_string()),
        }
    }

    #[test]
    fn test_converts_valid_request() {
        let address = Address::try_from(request()).unwrap();
        assert_eq!(address.city(), "성남시");
    }

    #[test]
    fn test_null_fields_are_rejected_with_field_message() {
        let err = Address::try_from(CreateAddressRequest { user_id: None, ..request() }).unwrap_err();
        assert_eq!(err.to_string(), "User ID cannot be null");

        let err = Address::try_from(CreateAddressRequest { province: None, ..request() }).unwrap_err();
        assert_eq!(err.to_string(), "Province cannot be null or empty");

        let err = Address::try_from(CreateAddressRequest { street: None, ..request() }).unwrap_err();
        assert_eq!(err.to_string(), "Street cannot be null or empty");
    }

    #[test]
    fn test_non_positive_user_id_fails_request_validation() {
        let invalid = CreateAddressRequest { user_id: Some(0), ..request() };
        assert!(invalid.validate().is_err());
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_update_request_maps_to_patch() {
        let patch: AddressPatch = UpdateAddressRequest {
            city: Some("수원시".to_string()),
            ..Default::default()
        }
        .into();

        assert_eq!(patch.city.as_deref(), Some("수원시"));
        assert!(patch.province.is_none());
        assert!(!patch.is_empty());
    }
}
