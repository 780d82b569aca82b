//! UserDetail Entity Implementation
//!
//! 사용자 프로필과 계정 상태를 담는 엔티티입니다.
//! 상태는 내부적으로 [`UserStatus`] 열거형으로 저장하지만,
//! 외부에는 항상 텍스트로 노출합니다.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::guards::{
    require_non_blank, require_non_negative, require_present, FieldViolation,
};
use crate::domain::entities::user_details::user_status::UserStatus;
use crate::utils::masking::mask_optional;

/// 전체 필드 생성을 위한 입력값
///
/// 빌더 대신 이름 있는 필드를 가진 평범한 구조체입니다.
/// 지정하지 않은 필드는 `..Default::default()`로 명시적으로 비워 둡니다.
///
/// ```rust,ignore
/// let detail = UserDetail::new(NewUserDetail {
///     user_id: Some("user-000123".to_string()),
///     real_name: Some("홍길동".to_string()),
///     status: Some(UserStatus::Active),
///     ..Default::default()
/// })?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserDetail {
    pub user_id: Option<String>,
    pub age: Option<i32>,
    pub real_name: Option<String>,
    pub status: Option<UserStatus>,
    pub hobby: Option<String>,
    pub introduction: Option<String>,
    pub last_login_ip: Option<String>,
}

/// 사용자 상세 정보 엔티티
///
/// MongoDB `user_details` 컬렉션 문서와 매핑되며 `user_id`는 유니크합니다.
///
/// [`UserDetail::empty`]로 만든 빈 엔티티는 로더가 채우는 용도이며,
/// 이 경로의 검증은 로더가 [`UserDetail::validate`]로 수행합니다.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<i32>,
    #[serde(default)]
    real_name: Option<String>,
    #[serde(default)]
    status: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hobby: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_login_ip: Option<String>,
}

impl UserDetail {
    /// 모든 필드를 채워 생성합니다.
    ///
    /// 나이와 실명을 먼저 검증하고, 이어서 사용자 ID와 상태의 존재를 확인합니다.
    /// 하나라도 실패하면 엔티티는 만들어지지 않습니다.
    ///
    /// # Errors
    ///
    /// - 나이가 음수: `Age cannot be negative`
    /// - 실명 누락/공백: `Real name cannot be null or empty`
    /// - 사용자 ID 누락: `userId cannot be null`
    /// - 상태 누락: `status cannot be null`
    pub fn new(fields: NewUserDetail) -> Result<Self, FieldViolation> {
        let NewUserDetail {
            user_id,
            age,
            real_name,
            status,
            hobby,
            introduction,
            last_login_ip,
        } = fields;

        Self::require_profile(age, real_name.as_deref(), user_id.as_deref())?;
        let real_name = real_name.ok_or(FieldViolation::Blank { field: "Real name" })?;
        let user_id = require_present("userId", user_id)?;
        let status = require_present("status", status)?;

        Ok(Self {
            id: None,
            user_id: Some(user_id),
            age,
            real_name: Some(real_name),
            status: Some(status),
            hobby,
            introduction,
            last_login_ip,
        })
    }

    /// 모든 필드가 비어 있는 엔티티를 만듭니다.
    pub fn empty() -> Self {
        Self::default()
    }

    /// 전체 생성 경로와 동일한 불변식을 검사합니다.
    ///
    /// 저장소에서 읽어온 문서를 호출자에게 넘기기 전에 사용합니다.
    pub fn validate(&self) -> Result<(), FieldViolation> {
        Self::require_profile(self.age, self.real_name.as_deref(), self.user_id.as_deref())?;
        require_present("status", self.status.as_ref())?;
        Ok(())
    }

    /// 상태를 제외한 필드를 생성자와 같은 순서(나이, 실명, 사용자 ID)로 검사합니다.
    ///
    /// 상태 텍스트를 해석하는 호출자는 이 검사를 먼저 통과시켜야
    /// 생성자와 같은 첫 번째 에러를 보고합니다.
    pub(crate) fn require_profile(
        age: Option<i32>,
        real_name: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<(), FieldViolation> {
        require_non_negative("Age", age)?;
        let real_name = real_name.ok_or(FieldViolation::Blank { field: "Real name" })?;
        require_non_blank("Real name", real_name)?;
        require_present("userId", user_id)?;
        Ok(())
    }

    pub fn id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub(crate) fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn real_name(&self) -> Option<&str> {
        self.real_name.as_deref()
    }

    /// 현재 상태의 이름. 상태가 없으면 `None`.
    pub fn status(&self) -> Option<&'static str> {
        self.status.map(|status| status.as_str())
    }

    /// 텍스트로 상태를 변경합니다.
    ///
    /// 열거형 값과 대소문자까지 정확히 일치해야 하며,
    /// 실패하면 기존 상태가 그대로 유지됩니다.
    pub fn set_status(&mut self, status: &str) -> Result<(), FieldViolation> {
        let parsed = status.parse::<UserStatus>()?;
        self.status = Some(parsed);
        Ok(())
    }

    pub fn hobby(&self) -> Option<&str> {
        self.hobby.as_deref()
    }

    pub fn introduction(&self) -> Option<&str> {
        self.introduction.as_deref()
    }

    pub fn last_login_ip(&self) -> Option<&str> {
        self.last_login_ip.as_deref()
    }

    /// 표시용으로 마스킹된 사용자 ID
    pub fn masked_user_id(&self) -> Option<String> {
        mask_optional(self.user_id.as_deref())
    }

    /// 표시용으로 마스킹된 마지막 접속 IP
    pub fn masked_last_login_ip(&self) -> Option<String> {
        mask_optional(self.last_login_ip.as_deref())
    }
}

fn or_null<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "null".to_string())
}

impl fmt::Display for UserDetail {
    /// 사용자 ID와 접속 IP는 마스킹하고 나머지 필드는 그대로 출력합니다.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserDetail{{id={}, userId='{}', age={}, realName='{}', status='{}', hobby='{}', introduction='{}', lastLoginIp='{}'}}",
            or_null(self.id_string()),
            or_null(self.masked_user_id()),
            or_null(self.age),
            or_null(self.real_name()),
            or_null(self.status()),
            or_null(self.hobby()),
            or_null(self.introduction()),
            or_null(self.masked_last_login_ip()),
        )
    }
}

impl fmt::Debug for UserDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDetail")
            .field("id", &self.id)
            .field("user_id", &self.masked_user_id())
            .field("age", &self.age)
            .field("real_name", &self.real_name)
            .field("status", &self.status)
            .field("hobby", &self.hobby)
            .field("introduction", &self.introduction)
            .field("last_login_ip", &self.masked_last_login_ip())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> NewUserDetail {
        NewUserDetail {
            user_id: Some("1234567890".to_string()),
            age: Some(30),
            real_name: Some("홍길동".to_string()),
            status: Some(UserStatus::Active),
            hobby: Some("등산".to_string()),
            introduction: None,
            last_login_ip: Some("192.168.0.100".to_string()),
        }
    }

    #[test]
    fn test_new_with_all_fields() {
        let detail = UserDetail::new(fields()).unwrap();

        assert_eq!(detail.user_id(), Some("1234567890"));
        assert_eq!(detail.age(), Some(30));
        assert_eq!(detail.real_name(), Some("홍길동"));
        assert_eq!(detail.status(), Some("ACTIVE"));
        assert_eq!(detail.hobby(), Some("등산"));
        assert!(detail.introduction().is_none());
        assert!(detail.validate().is_ok());
    }

    #[test]
    fn test_age_absent_or_zero_is_accepted() {
        for age in [None, Some(0)] {
            let detail = UserDetail::new(NewUserDetail { age, ..fields() }).unwrap();
            assert_eq!(detail.age(), age);
        }
    }

    #[test]
    fn test_negative_age_is_rejected() {
        let err = UserDetail::new(NewUserDetail { age: Some(-1), ..fields() }).unwrap_err();
        assert_eq!(err, FieldViolation::Negative { field: "Age" });
    }

    #[test]
    fn test_age_is_checked_before_missing_user_id() {
        let err = UserDetail::new(NewUserDetail {
            age: Some(-5),
            user_id: None,
            ..fields()
        })
        .unwrap_err();
        assert_eq!(err, FieldViolation::Negative { field: "Age" });
    }

    #[test]
    fn test_blank_real_name_is_rejected() {
        for real_name in [None, Some("   ".to_string())] {
            let err = UserDetail::new(NewUserDetail { real_name, ..fields() }).unwrap_err();
            assert_eq!(err, FieldViolation::Blank { field: "Real name" });
        }
    }

    #[test]
    fn test_missing_user_id_or_status_is_rejected() {
        let err = UserDetail::new(NewUserDetail { user_id: None, ..fields() }).unwrap_err();
        assert_eq!(err.to_string(), "userId cannot be null");

        let err = UserDetail::new(NewUserDetail { status: None, ..fields() }).unwrap_err();
        assert_eq!(err.to_string(), "status cannot be null");
    }

    #[test]
    fn test_empty_has_no_fields() {
        let detail = UserDetail::empty();

        assert!(detail.id().is_none());
        assert!(detail.user_id().is_none());
        assert!(detail.status().is_none());
        assert!(detail.real_name().is_none());
        assert!(detail.validate().is_err());
    }

    #[test]
    fn test_set_status_accepts_every_member() {
        let mut detail = UserDetail::new(fields()).unwrap();

        for name in ["ACTIVE", "INACTIVE", "SUSPENDED"] {
            detail.set_status(name).unwrap();
            assert_eq!(detail.status(), Some(name));
        }
    }

    #[test]
    fn test_set_status_rejects_unknown_and_keeps_previous() {
        let mut detail = UserDetail::new(fields()).unwrap();
        detail.set_status("SUSPENDED").unwrap();

        let err = detail.set_status("UNKNOWN").unwrap_err();

        assert_eq!(err.to_string(), "Invalid status value: UNKNOWN");
        assert_eq!(detail.status(), Some("SUSPENDED"));
    }

    #[test]
    fn test_set_status_on_empty_record() {
        let mut detail = UserDetail::empty();
        assert!(detail.set_status("active").is_err());
        assert!(detail.status().is_none());

        detail.set_status("INACTIVE").unwrap();
        assert_eq!(detail.status(), Some("INACTIVE"));
    }

    #[test]
    fn test_display_masks_sensitive_fields_only() {
        let detail = UserDetail::new(fields()).unwrap();
        let rendered = detail.to_string();

        assert!(rendered.contains("userId='123****890'"));
        assert!(rendered.contains("lastLoginIp='192*******100'"));
        assert!(rendered.contains("realName='홍길동'"));
        assert!(rendered.contains("status='ACTIVE'"));
        assert!(!rendered.contains("1234567890"));
    }

    #[test]
    fn test_display_leaves_short_identifiers_unmasked() {
        let detail = UserDetail::new(NewUserDetail {
            user_id: Some("u123".to_string()),
            last_login_ip: None,
            ..fields()
        })
        .unwrap();
        let rendered = detail.to_string();

        assert!(rendered.contains("userId='u123'"));
        assert!(rendered.contains("lastLoginIp='null'"));
    }

    #[test]
    fn test_debug_does_not_leak_user_id() {
        let detail = UserDetail::new(fields()).unwrap();
        let debug = format!("{:?}", detail);

        assert!(!debug.contains("1234567890"));
        assert!(debug.contains("123****890"));
    }

    #[test]
    fn test_storage_document_keeps_raw_values() {
        let detail = UserDetail::new(fields()).unwrap();
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["user_id"], "1234567890");
        assert_eq!(json["status"], "ACTIVE");

        let restored: UserDetail = serde_json::from_value(json).unwrap();
        assert_eq!(restored, detail);
    }

    #[test]
    fn test_unknown_stored_status_fails_hydration() {
        let json = serde_json::json!({
            "user_id": "1234567890",
            "real_name": "홍길동",
            "status": "DELETED"
        });
        assert!(serde_json::from_value::<UserDetail>(json).is_err());
    }
}
