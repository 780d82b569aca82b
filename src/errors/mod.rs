//! 애플리케이션 에러 모듈
//!
//! [`errors::AppError`]를 중심으로 한 통합 에러 타입과
//! 편의 trait을 제공합니다.

pub mod errors;

pub use errors::*;
