//! 사용자 상세 정보 리포지토리 모듈

pub mod user_detail_repo;

pub use user_detail_repo::UserDetailRepository;
