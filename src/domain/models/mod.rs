//! 도메인 모델 (값 객체)
//!
//! 엔티티가 아닌 조회 결과 래퍼 등을 정의합니다.

pub mod page;

pub use page::*;
