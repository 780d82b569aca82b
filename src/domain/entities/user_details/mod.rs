//! UserDetails Entity Module
//!
//! 사용자 한 명당 하나씩 존재하는 프로필/상태 엔티티를 정의합니다.

pub mod user_detail;
pub mod user_status;

pub use user_detail::*;
pub use user_status::*;
