//! 사용자 요청 DTO
//!
//! 계정 생성, 사용자명 변경, 목록 조회 요청의 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
///
/// ```json
/// {
///   "user_name": "aa",
///   "email": "aa@126.com",
///   "password": "aa123456",
///   "nick_name": "aa"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자명 (2-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(
        min = 2,
        max = 30,
        message = "사용자명은 2-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_user_name"))]
    pub user_name: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 8자)
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    pub password: String,

    /// 닉네임 (1-50자, 유니코드 지원)
    #[validate(length(
        min = 1,
        max = 50,
        message = "닉네임은 1-50자 사이여야 합니다"
    ))]
    pub nick_name: String,
}

/// 사용자명 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ModifyUserNameRequest {
    #[validate(length(
        min = 2,
        max = 30,
        message = "사용자명은 2-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_user_name"))]
    pub user_name: String,
}

/// 사용자 목록 조회 쿼리
///
/// `page`는 0부터 시작합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserListQuery {
    pub page: Option<u64>,

    #[validate(range(min = 1, max = 100, message = "size는 1-100 사이여야 합니다"))]
    pub size: Option<u64>,

    pub nick_name: Option<String>,
}

/// 닉네임 + 이메일 조건의 슬라이스 조회 쿼리
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserSliceQuery {
    pub page: Option<u64>,

    #[validate(range(min = 1, max = 100, message = "size는 1-100 사이여야 합니다"))]
    pub size: Option<u64>,

    #[validate(length(min = 1, message = "nick_name은 필수입니다"))]
    pub nick_name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_user_name(user_name: &str) -> Result<(), ValidationError> {
    if !user_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_user_name")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            user_name: "aa".to_string(),
            email: "aa@126.com".to_string(),
            password: "aa123456".to_string(),
            nick_name: "aa".to_string(),
        }
    }

    #[test]
    fn test_valid_create_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let request = CreateUserRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_user_name_charset() {
        let request = CreateUserRequest {
            user_name: "aa bb".to_string(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_name"));
    }

    #[test]
    fn test_short_password_is_rejected() {
        let request = CreateUserRequest {
            password: "short".to_string(),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_list_query_size_bounds() {
        let query = UserListQuery { size: Some(0), ..Default::default() };
        assert!(query.validate().is_err());

        let query = UserListQuery { size: Some(100), ..Default::default() };
        assert!(query.validate().is_ok());
    }
}
