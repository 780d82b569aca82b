//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 엔티티와 그 불변식,
//! 그리고 계층 간 데이터 전달 구조를 담당합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/  ← Address, UserDetail, User + 필드 가드
//! ├── models/    ← Page / Slice 값 객체
//! └── dto/       ← 요청/응답 DTO
//! ```
//!
//! 엔티티 계층은 I/O를 하지 않는 순수한 동기 코드입니다.
//! 검증 실패는 호출 즉시 [`entities::guards::FieldViolation`]으로 보고됩니다.

pub mod entities;
pub mod dto;
pub mod models;
