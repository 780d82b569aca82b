//! User Entity Implementation
//!
//! 로그인 계정 엔티티입니다. 사용자명과 이메일은 각각 유니크합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub user_name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 닉네임
    pub nick_name: String,
    /// 가입 시간
    pub reg_time: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 비밀번호는 해시된 값을 받습니다. 가입 시간은 현재 시각으로 기록됩니다.
    pub fn new(user_name: String, email: String, password_hash: String, nick_name: String) -> Self {
        Self {
            id: None,
            user_name,
            email,
            password_hash,
            nick_name,
            reg_time: DateTime::now(),
        }
    }
}
