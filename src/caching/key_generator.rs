//! # 캐시 키 생성기
//!
//! Spring Cache의 `KeyGenerator`와 같은 역할을 합니다.
//! (대상 타입 이름, 연산 이름, 인자 목록)에서 항상 같은 문자열 키를 만듭니다.
//!
//! ## 키 형식
//!
//! ```text
//! <타입 전체 경로>.<연산 이름>[_<인자1>][_<인자2>]...
//! ```
//!
//! 값이 없는 인자는 빈 칸이 아니라 리터럴 `null`로 기록됩니다.
//!
//! ```rust,ignore
//! use crate::caching::key_generator::KeyGenerator;
//!
//! let key = KeyGenerator::generate_for_type("Service", "fetch", &[Some(&42), None, Some(&"x")]);
//! assert_eq!(key, "Service.fetch_42_null_x");
//! ```
//!
//! 순수 함수이므로 잠금이 필요 없습니다. 동시성 보장은 Redis 쪽의 책임입니다.

use std::any::type_name_of_val;
use std::fmt::{self, Write};

/// 키 인자 하나. `None`은 `null`로 기록됩니다.
pub type KeyParam<'a> = Option<&'a dyn fmt::Display>;

const METHOD_SEPARATOR: char = '.';
const PARAM_SEPARATOR: char = '_';
const NULL_TOKEN: &str = "null";

/// 결정적 캐시 키 생성기
pub struct KeyGenerator;

impl KeyGenerator {
    /// 대상 값의 타입 이름을 사용해 키를 만듭니다.
    ///
    /// 리포지토리에서는 `KeyGenerator::generate(self, "find_by_id", &[Some(&id)])`
    /// 형태로 호출합니다.
    pub fn generate<T: ?Sized>(target: &T, method: &str, params: &[KeyParam<'_>]) -> String {
        Self::generate_for_type(type_name_of_val(target), method, params)
    }

    /// 타입 이름을 직접 지정해 키를 만듭니다.
    pub fn generate_for_type(type_name: &str, method: &str, params: &[KeyParam<'_>]) -> String {
        let mut key = String::with_capacity(type_name.len() + method.len() + params.len() * 8);
        key.push_str(type_name);
        key.push(METHOD_SEPARATOR);
        key.push_str(method);

        for param in params {
            key.push(PARAM_SEPARATOR);
            match param {
                // String에 대한 write!는 실패하지 않음
                Some(value) => {
                    let _ = write!(key, "{}", value);
                }
                None => key.push_str(NULL_TOKEN),
            }
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AddressService;

    #[test]
    fn test_key_format_with_null_argument() {
        let key = KeyGenerator::generate_for_type("Service", "fetch", &[Some(&42), None, Some(&"x")]);
        assert_eq!(key, "Service.fetch_42_null_x");
    }

    #[test]
    fn test_key_is_deterministic() {
        let first = KeyGenerator::generate_for_type("Service", "fetch", &[Some(&42), None, Some(&"x")]);
        let second = KeyGenerator::generate_for_type("Service", "fetch", &[Some(&42), None, Some(&"x")]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_varying_any_argument_changes_key() {
        let base = KeyGenerator::generate_for_type("Service", "fetch", &[Some(&42), None, Some(&"x")]);

        let variants = [
            KeyGenerator::generate_for_type("Service", "fetch", &[Some(&43), None, Some(&"x")]),
            KeyGenerator::generate_for_type("Service", "fetch", &[Some(&42), Some(&0), Some(&"x")]),
            KeyGenerator::generate_for_type("Service", "fetch", &[Some(&42), None, Some(&"y")]),
        ];

        for variant in variants {
            assert_ne!(base, variant);
        }
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(KeyGenerator::generate_for_type("Service", "list", &[]), "Service.list");
    }

    #[test]
    fn test_generate_uses_full_type_path() {
        let service = AddressService;
        let key = KeyGenerator::generate(&service, "find_by_id", &[Some(&"abc")]);

        assert!(key.ends_with("AddressService.find_by_id_abc"));
        assert!(key.contains("::"));
    }
}
