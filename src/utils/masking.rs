//! # 민감 정보 마스킹
//!
//! 로그, `Display` 출력, API 응답에서 사용자 ID나 접속 IP 같은
//! 민감한 문자열의 가운데 부분을 가립니다.

/// 마스킹에 사용하는 문자
pub const MASK_CHAR: char = '*';

/// 앞뒤로 보존하는 문자 수
const VISIBLE_EDGE: usize = 3;

/// 앞 3자, 뒤 3자를 제외한 문자를 `*`로 바꿉니다.
///
/// 7자 이상인 문자열에만 적용됩니다. 6자 이하에서는 앞뒤 3자 창이
/// 겹치거나 맞닿아 가릴 문자가 없으므로 원본을 그대로 반환합니다.
/// 길이는 바이트가 아닌 문자 단위로 셉니다.
///
/// ```rust,ignore
/// assert_eq!(mask_sensitive("1234567890"), "123****890");
/// assert_eq!(mask_sensitive("1234"), "1234");
/// ```
pub fn mask_sensitive(data: &str) -> String {
    let len = data.chars().count();
    if len <= VISIBLE_EDGE * 2 {
        return data.to_string();
    }

    data.chars()
        .enumerate()
        .map(|(i, c)| {
            if i < VISIBLE_EDGE || i >= len - VISIBLE_EDGE {
                c
            } else {
                MASK_CHAR
            }
        })
        .collect()
}

/// `Option` 값에 대한 마스킹. `None`은 그대로 유지합니다.
pub fn mask_optional(data: Option<&str>) -> Option<String> {
    data.map(mask_sensitive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_interior_of_ten_chars() {
        assert_eq!(mask_sensitive("1234567890"), "123****890");
    }

    #[test]
    fn test_seven_chars_masks_single_middle_char() {
        assert_eq!(mask_sensitive("abcdefg"), "abc*efg");
    }

    #[test]
    fn test_short_strings_are_left_unmasked() {
        // 4~6자는 앞뒤 3자 창이 겹치므로 마스킹하지 않음
        assert_eq!(mask_sensitive("1234"), "1234");
        assert_eq!(mask_sensitive("12345"), "12345");
        assert_eq!(mask_sensitive("123456"), "123456");
        assert_eq!(mask_sensitive("abc"), "abc");
        assert_eq!(mask_sensitive(""), "");
    }

    #[test]
    fn test_masks_multibyte_characters_by_char() {
        assert_eq!(mask_sensitive("가나다라마바사아"), "가나다**바사아");
    }

    #[test]
    fn test_masks_network_address() {
        assert_eq!(mask_sensitive("192.168.0.100"), "192*******100");
    }

    #[test]
    fn test_mask_optional() {
        assert_eq!(mask_optional(None), None);
        assert_eq!(mask_optional(Some("user-000123")), Some("use*****123".to_string()));
    }
}
