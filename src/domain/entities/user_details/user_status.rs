//! 사용자 상태 열거형

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::guards::FieldViolation;

/// 사용자 상태 (닫힌 열거형)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    /// 외부 텍스트 표현과 열거형 값의 대응표
    const LOOKUP: [(&'static str, UserStatus); 3] = [
        ("ACTIVE", UserStatus::Active),
        ("INACTIVE", UserStatus::Inactive),
        ("SUSPENDED", UserStatus::Suspended),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Suspended => "SUSPENDED",
        }
    }

    pub fn all() -> impl Iterator<Item = UserStatus> {
        Self::LOOKUP.into_iter().map(|(_, status)| status)
    }
}

impl FromStr for UserStatus {
    type Err = FieldViolation;

    /// 대소문자를 구분해 정확히 일치하는 값만 허용합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::LOOKUP
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, status)| *status)
            .ok_or_else(|| FieldViolation::InvalidValue {
                field: "status",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
