//! neo_backend
//!
//! 검증된 엔티티, 메일 알림, Redis 캐싱을 보여주는 샘플 백엔드입니다.
//!
//! # Features
//!
//! - **검증된 엔티티**: `Address`는 생성과 변경 시 필드 불변식을 즉시 검사
//! - **상태 엔티티**: `UserDetail`은 닫힌 상태 열거형과 표시용 마스킹을 제공
//! - **캐시 키 생성기**: (타입, 연산, 인자)에서 결정적인 문자열 키 생성
//! - **MongoDB**: 영구 저장, 페이지/슬라이스 조회, 명시적 트랜잭션
//! - **Redis**: 조회 결과 캐싱
//! - **SMTP**: 텍스트/HTML/첨부/인라인 리소스 메일
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 메일 발송
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스, 캐시 키 관리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use neo_backend::domain::entities::addresses::Address;
//! use neo_backend::caching::key_generator::KeyGenerator;
//!
//! let address = Address::new(42, "Gyeonggi", "Seongnam", "Pangyo-ro 235")?;
//! let key = KeyGenerator::generate_for_type("AddressRepository", "find_by_user_id", &[Some(&42)]);
//! assert_eq!(key, "AddressRepository.find_by_user_id_42");
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
