//! Users Entity Module
//!
//! 로그인 계정을 표현하는 User 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "aa".to_string(),
//!     "aa@126.com".to_string(),
//!     hashed_password,
//!     "aa".to_string(),
//! );
//! ```

pub mod user;

pub use user::*;
