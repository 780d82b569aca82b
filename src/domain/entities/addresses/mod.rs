//! Addresses Entity Module
//!
//! 한 명의 사용자에게 속한 우편 주소 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::addresses::Address;
//!
//! let mut address = Address::new(1, "경기도", "성남시", "판교역로 235")?;
//! address.set_city("수원시")?;
//! ```

pub mod address;

pub use address::*;
