//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 구조체를 정의합니다.
//!
//! ## 검증 계층
//!
//! ```text
//! JSON ──serde──▶ Request DTO ──validator──▶ Entity 생성자/setter ──▶ Repository
//!                  (형식 검증)                 (불변식 검증)
//! ```
//!
//! 요청 DTO는 `validator`로 형식(길이 상한, 이메일, 양수 ID 등)을 확인하고,
//! 엔티티 불변식은 엔티티 자신이 다시 검증합니다. 응답 DTO는 엔티티에서
//! `From`으로 변환되며, 민감한 값은 이 단계에서 마스킹됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── addresses/     ← 주소 요청/응답
//! ├── user_details/  ← 사용자 상세 정보 요청/응답 (마스킹)
//! └── users/         ← 계정 요청/응답
//! ```

pub mod addresses;
pub mod user_details;
pub mod users;
