//! 사용자 응답 DTO
//!
//! 비밀번호 해시는 응답에 포함하지 않습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 정보 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub nick_name: String,
    pub reg_time: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            user_name,
            email,
            nick_name,
            reg_time,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            user_name,
            email,
            nick_name,
            reg_time,
        }
    }
}

/// 사용자 생성 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_omits_password_hash() {
        let user = User::new(
            "aa".to_string(),
            "aa@126.com".to_string(),
            "$2b$04$hash".to_string(),
            "aa".to_string(),
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["user_name"], "aa");
        assert_eq!(json["id"], "");
    }
}
