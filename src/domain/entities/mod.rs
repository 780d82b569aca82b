//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑됩니다.
//!
//! ## JPA 제약과의 대응
//!
//! | JPA | 이 모듈 |
//! |-----|---------|
//! | `@Column(nullable = false)` | [`guards::require_present`] |
//! | `@Column(length = N)` | [`guards::require_text`] |
//! | `@Id @GeneratedValue` | `_id: Option<ObjectId>` (저장 시 부여) |
//! | `@Column(unique = true)` | 리포지토리의 유니크 인덱스 |
//! | `Enum.valueOf` | [`user_details::UserStatus`]의 `FromStr` |
//!
//! 선언형 제약 대신 모든 생성자와 setter가 명시적으로 가드를 호출하며,
//! 위반 시 [`guards::FieldViolation`]을 즉시 반환합니다. 부분 적용은 없습니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── guards.rs       ← 필드 검증 가드
//! ├── addresses/      ← Address 엔티티
//! ├── user_details/   ← UserDetail 엔티티 + UserStatus
//! └── users/          ← User 엔티티
//! ```

pub mod guards;
pub mod addresses;
pub mod user_details;
pub mod users;
