//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 같은 역할을 수행합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 불변식을 가진 도메인 모델               ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! - 서비스는 `web::Data<...>`로 주입받음
//! - 요청 DTO는 `validate()?`로 먼저 검증 (`ValidationErrors` → `AppError`)
//! - 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며 에러 응답은
//!   `{"error": "..."}` 형태
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_address(
//!     service: web::Data<AddressService>,
//!     payload: web::Json<CreateAddressRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let address = service.create_address(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(address))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 계정 (`/api/v1/users`)
//! - **`addresses`**: 주소 (`/api/v1/addresses`)
//! - **`user_details`**: 사용자 상세 정보와 상태 (`/api/v1/user-details`)

pub mod addresses;
pub mod user_details;
pub mod users;
