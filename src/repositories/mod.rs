//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하고 Redis를 통한 캐싱을 지원합니다.
//! 캐시 키는 [`KeyGenerator`](crate::caching::key_generator::KeyGenerator)로
//! 리포지토리 타입/연산/인자에서 만들어집니다.
//!
//! # 캐싱 규칙
//!
//! - 조회: 캐시 우선, 미스 시 DB 조회 후 TTL과 함께 저장
//! - 쓰기: DB 반영 후 관련 캐시 키 삭제
//! - 캐시 오류는 저장소 연산을 실패시키지 않고 `warn` 로그로 남김
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::addresses::AddressRepository;
//!
//! let repo = AddressRepository::new(database.clone(), redis.clone());
//! let address = repo.find_by_id("6650f0c2a1b2c3d4e5f60718").await?;
//! ```

use log::warn;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};
use serde::{Serialize, de::DeserializeOwned};

use crate::caching::redis::RedisClient;
use crate::errors::AppError;

pub mod addresses;
pub mod user_details;
pub mod users;

/// 문자열 ID를 ObjectId로 변환합니다.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

pub(crate) fn db_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

/// MongoDB 유니크 인덱스 위반 코드 (E11000)
const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 유니크 인덱스 위반은 `ConflictError`로, 나머지는 `DatabaseError`로 변환합니다.
///
/// 사전 중복 확인과 쓰기 사이에 다른 요청이 끼어든 경우를 처리합니다.
pub(crate) fn write_error(conflict_message: &'static str) -> impl Fn(mongodb::error::Error) -> AppError {
    move |e| {
        if is_duplicate_key(&e) {
            warn!("유니크 인덱스 충돌: {}", e);
            AppError::ConflictError(conflict_message.to_string())
        } else {
            db_error(e)
        }
    }
}

/// 캐시에서 값을 읽습니다. 실패는 미스로 취급합니다.
pub(crate) async fn cache_get<T: DeserializeOwned>(redis: &RedisClient, key: &str) -> Option<T> {
    match redis.get::<T>(key).await {
        Ok(value) => value,
        Err(e) => {
            warn!("캐시 조회 실패 (key={}): {}", key, e);
            None
        }
    }
}

pub(crate) async fn cache_put<T: Serialize>(redis: &RedisClient, key: &str, value: &T, ttl: u64) {
    if let Err(e) = redis.set_with_expiry(key, value, ttl).await {
        warn!("캐시 저장 실패 (key={}): {}", key, e);
    }
}

pub(crate) async fn cache_evict(redis: &RedisClient, keys: &[String]) {
    if let Err(e) = redis.del_multiple(keys).await {
        warn!("캐시 무효화 실패 (keys={:?}): {}", keys, e);
    }
}
