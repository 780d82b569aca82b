//! 사용자 상세 정보 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::guards::FieldViolation;
use crate::domain::entities::user_details::{NewUserDetail, UserDetail, UserStatus};

/// 사용자 상세 정보 생성 요청
///
/// 상태는 텍스트로 받으며, 엔티티로 변환할 때 열거형으로 해석됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserDetailRequest {
    #[validate(length(max = 64, message = "userId는 최대 64자입니다"))]
    pub user_id: Option<String>,
    pub age: Option<i32>,
    pub real_name: Option<String>,
    pub status: Option<String>,
    #[validate(length(max = 100, message = "취미는 최대 100자입니다"))]
    pub hobby: Option<String>,
    #[validate(length(max = 1000, message = "자기소개는 최대 1000자입니다"))]
    pub introduction: Option<String>,
    pub last_login_ip: Option<String>,
}

impl TryFrom<CreateUserDetailRequest> for UserDetail {
    type Error = FieldViolation;

    fn try_from(request: CreateUserDetailRequest) -> Result<Self, Self::Error> {
        UserDetail::require_profile(
            request.age,
            request.real_name.as_deref(),
            request.user_id.as_deref(),
        )?;

        let status = request
            .status
            .as_deref()
            .map(str::parse::<UserStatus>)
            .transpose()?;

        UserDetail::new(NewUserDetail {
            user_id: request.user_id,
            age: request.age,
            real_name: request.real_name,
            status,
            hobby: request.hobby,
            introduction: request.introduction,
            last_login_ip: request.last_login_ip,
        })
    }
}

/// 상태 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateUserDetailRequest {
        CreateUserDetailRequest {
            user_id: Some("user-000123".to_string()),
            age: Some(20),
            real_name: Some("홍길동".to_string()),
            status: Some("ACTIVE".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_converts_status_text() {
        let detail = UserDetail::try_from(request()).unwrap();
        assert_eq!(detail.status(), Some("ACTIVE"));
    }

    #[test]
    fn test_unknown_status_text_is_rejected() {
        let err = UserDetail::try_from(CreateUserDetailRequest {
            status: Some("UNKNOWN".to_string()),
            ..request()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid status value: UNKNOWN");
    }

    #[test]
    fn test_profile_errors_come_before_status_text() {
        let err = UserDetail::try_from(CreateUserDetailRequest {
            age: Some(-1),
            status: Some("BAD".to_string()),
            ..request()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Age cannot be negative");

        let err = UserDetail::try_from(CreateUserDetailRequest {
            user_id: None,
            status: Some("BAD".to_string()),
            ..request()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "userId cannot be null");
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let err = UserDetail::try_from(CreateUserDetailRequest { status: None, ..request() }).unwrap_err();
        assert_eq!(err.to_string(), "status cannot be null");
    }

    #[test]
    fn test_request_length_limits() {
        let long = CreateUserDetailRequest {
            user_id: Some("x".repeat(65)),
            ..request()
        };
        assert!(long.validate().is_err());
        assert!(request().validate().is_ok());
    }
}
