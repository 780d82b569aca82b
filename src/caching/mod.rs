//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시 클라이언트와 결정적 캐시 키 생성기를 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 멀티플렉싱 연결
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원 및 다중 키 무효화
//! - 타입/연산/인자 기반 캐시 키 생성
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::{key_generator::KeyGenerator, redis::RedisClient};
//!
//! let cache = RedisClient::new("redis://localhost:6379").await?;
//! let key = KeyGenerator::generate(&repo, "find_by_id", &[Some(&id)]);
//! cache.set_with_expiry(&key, &address, 600).await?;
//! let cached: Option<Address> = cache.get(&key).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! CACHE_TTL_SECONDS=600             # 기본값
//! ```

pub mod key_generator;
pub mod redis;
