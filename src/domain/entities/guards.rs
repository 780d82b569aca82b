//! 엔티티 필드 검증 가드
//!
//! JPA의 `@Column(nullable = false, length = N)` 같은 선언형 제약을
//! 명시적인 함수 호출로 표현합니다. 모든 엔티티 생성자와 setter는
//! 값을 대입하기 전에 이 가드들을 먼저 통과해야 합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::guards::require_text;
//!
//! require_text("Province", "경기도", 50)?;
//! ```

use thiserror::Error;

/// 엔티티 불변식 위반
///
/// 에러 메시지는 항상 위반한 필드 이름을 포함합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    /// 필수 값이 없음
    #[error("{field} cannot be null")]
    Missing { field: &'static str },

    /// 값이 없거나 공백만으로 구성됨
    #[error("{field} cannot be null or empty")]
    Blank { field: &'static str },

    /// 최대 길이 초과
    #[error("{field} length exceeds the maximum allowed ({max} characters)")]
    TooLong { field: &'static str, max: usize },

    /// 음수 불가 필드에 음수가 들어옴
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    /// 양수여야 하는 식별자가 0 이하
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    /// 닫힌 열거형에 존재하지 않는 값
    #[error("Invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// 필수 값의 존재 여부를 확인하고 값을 꺼냅니다.
pub fn require_present<T>(field: &'static str, value: Option<T>) -> Result<T, FieldViolation> {
    value.ok_or(FieldViolation::Missing { field })
}

/// trim 후 빈 문자열이 아닌지 확인합니다.
pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), FieldViolation> {
    if value.trim().is_empty() {
        return Err(FieldViolation::Blank { field });
    }
    Ok(())
}

/// 필수 문자열 필드 검증
///
/// 공백 검사 후 trim 하지 않은 원본 길이(문자 수)를 `max_len`과 비교합니다.
/// 초과한 값은 잘라내지 않고 거부합니다.
pub fn require_text(field: &'static str, value: &str, max_len: usize) -> Result<(), FieldViolation> {
    require_non_blank(field, value)?;

    if value.chars().count() > max_len {
        return Err(FieldViolation::TooLong { field, max: max_len });
    }
    Ok(())
}

/// 선택 필드이지만 값이 있으면 0 이상이어야 하는 경우
pub fn require_non_negative(field: &'static str, value: Option<i32>) -> Result<(), FieldViolation> {
    match value {
        Some(v) if v < 0 => Err(FieldViolation::Negative { field }),
        _ => Ok(()),
    }
}

/// 식별자처럼 1 이상이어야 하는 값
pub fn require_positive(field: &'static str, value: i64) -> Result<(), FieldViolation> {
    if value <= 0 {
        return Err(FieldViolation::NotPositive { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_accepts_value_at_limit() {
        let value = "a".repeat(50);
        assert!(require_text("City", &value, 50).is_ok());
    }

    #[test]
    fn test_require_text_rejects_one_over_limit() {
        let value = "a".repeat(51);
        assert_eq!(
            require_text("City", &value, 50),
            Err(FieldViolation::TooLong { field: "City", max: 50 })
        );
    }

    #[test]
    fn test_require_text_counts_untrimmed_length() {
        // 48자 + 앞뒤 공백 = 50자 (허용), 앞뒤 공백 포함 51자 (거부)
        let ok = format!(" {} ", "a".repeat(48));
        let too_long = format!(" {}  ", "a".repeat(48));

        assert!(require_text("City", &ok, 50).is_ok());
        assert!(require_text("City", &too_long, 50).is_err());
    }

    #[test]
    fn test_require_text_counts_characters_not_bytes() {
        let value = "가".repeat(50);
        assert!(require_text("Province", &value, 50).is_ok());
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        assert_eq!(
            require_text("Street", " \t\n ", 100),
            Err(FieldViolation::Blank { field: "Street" })
        );
        assert!(require_text("Street", "", 100).is_err());
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require_present("User ID", Some(7_i64)), Ok(7));
        assert_eq!(
            require_present::<i64>("User ID", None),
            Err(FieldViolation::Missing { field: "User ID" })
        );
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("Age", None).is_ok());
        assert!(require_non_negative("Age", Some(0)).is_ok());
        assert_eq!(
            require_non_negative("Age", Some(-1)),
            Err(FieldViolation::Negative { field: "Age" })
        );
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("User ID", 1).is_ok());
        assert_eq!(
            require_positive("User ID", 0),
            Err(FieldViolation::NotPositive { field: "User ID" })
        );
        assert!(require_positive("User ID", -5).is_err());
    }

    #[test]
    fn test_violation_messages_name_the_field() {
        assert_eq!(
            FieldViolation::TooLong { field: "Street", max: 100 }.to_string(),
            "Street length exceeds the maximum allowed (100 characters)"
        );
        assert_eq!(
            FieldViolation::Missing { field: "User ID" }.to_string(),
            "User ID cannot be null"
        );
        assert_eq!(
            FieldViolation::InvalidValue { field: "status", value: "UNKNOWN".to_string() }.to_string(),
            "Invalid status value: UNKNOWN"
        );
    }
}
