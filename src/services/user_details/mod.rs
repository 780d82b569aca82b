//! 사용자 상세 정보 서비스 모듈
//!
//! 상태 변경과 마스킹된 조회 응답을 제공합니다.

pub mod user_detail_service;

pub use user_detail_service::UserDetailService;
