//! 사용자 상세 정보 응답 DTO
//!
//! 사용자 ID와 마지막 접속 IP는 마스킹된 값으로 내보냅니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user_details::UserDetail;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetailResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub age: Option<i32>,
    pub real_name: Option<String>,
    pub status: Option<String>,
    pub hobby: Option<String>,
    pub introduction: Option<String>,
    pub last_login_ip: Option<String>,
}

impl From<UserDetail> for UserDetailResponse {
    fn from(detail: UserDetail) -> Self {
        Self {
            id: detail.id_string().unwrap_or_default(),
            user_id: detail.masked_user_id(),
            age: detail.age(),
            real_name: detail.real_name().map(str::to_string),
            status: detail.status().map(str::to_string),
            hobby: detail.hobby().map(str::to_string),
            introduction: detail.introduction().map(str::to_string),
            last_login_ip: detail.masked_last_login_ip(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user_details::{NewUserDetail, UserStatus};

    #[test]
    fn test_response_masks_identifiers() {
        let detail = UserDetail::new(NewUserDetail {
            user_id: Some("1234567890".to_string()),
            real_name: Some("홍길동".to_string()),
            status: Some(UserStatus::Inactive),
            last_login_ip: Some("10.0.0.1".to_string()),
            ..Default::default()
        })
        .unwrap();

        let response = UserDetailResponse::from(detail);

        assert_eq!(response.user_id.as_deref(), Some("123****890"));
        assert_eq!(response.last_login_ip.as_deref(), Some("10.**0.1"));
        assert_eq!(response.real_name.as_deref(), Some("홍길동"));
        assert_eq!(response.status.as_deref(), Some("INACTIVE"));
    }
}
