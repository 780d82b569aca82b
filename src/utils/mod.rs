//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`masking`] - 민감 정보 표시용 마스킹
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::masking::mask_sensitive;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert_eq!(mask_sensitive("1234567890"), "123****890");
//! print_boxed_title("System Initialized");
//! ```

pub mod display_terminal;
pub mod masking;
