//! 주소 데이터 액세스 리포지토리 모듈

pub mod address_repo;

pub use address_repo::AddressRepository;
