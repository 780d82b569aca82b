//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 리포지토리를 주입받아 생성되고,
//! `web::Data`로 핸들러와 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{addresses::AddressService, users::UserService};
//!
//! let address_service = AddressService::new(address_repo.clone());
//! let user_service = UserService::new(user_repo.clone(), mail.clone());
//! ```

pub mod addresses;
pub mod mail;
pub mod user_details;
pub mod users;
