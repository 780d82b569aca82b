//! # 주소 리포지토리 구현
//!
//! `addresses` 컬렉션에 대한 CRUD와 캐싱을 담당합니다.
//! 컬렉션에서 읽은 문서는 [`Address`]의 역직렬화 단계에서 생성자와 같은
//! 검증을 거치므로, 규칙을 어긴 문서는 에러로 드러납니다.

use std::any::type_name;
use std::sync::Arc;

use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, Collection, IndexModel};

use crate::{
    caching::{key_generator::KeyGenerator, redis::RedisClient},
    config::CacheConfig,
    db::Database,
    domain::entities::addresses::Address,
    errors::AppError,
    repositories::{cache_evict, cache_get, cache_put, db_error, parse_object_id},
};

const COLLECTION_NAME: &str = "addresses";

/// 주소 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// | 연산 | 캐시 키 |
/// |------|---------|
/// | `find_by_id(id)` | `<타입>.find_by_id_<id>` |
/// | `find_by_user_id(user_id)` | `<타입>.find_by_user_id_<user_id>` |
///
/// 쓰기 연산은 해당 주소의 단건 키와 소유자의 목록 키를 함께 무효화합니다.
pub struct AddressRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
    ttl_seconds: u64,
}

impl AddressRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self {
            db,
            redis,
            ttl_seconds: CacheConfig::ttl_seconds(),
        }
    }

    fn collection(&self) -> Collection<Address> {
        self.db.get_database().collection::<Address>(COLLECTION_NAME)
    }

    /// 대소문자와 무관하게 같은 문서는 같은 키가 되도록 파싱된 ID의 hex로 만듭니다.
    fn id_key(id: &ObjectId) -> String {
        KeyGenerator::generate_for_type(type_name::<Self>(), "find_by_id", &[Some(&id.to_hex())])
    }

    fn owner_key(&self, user_id: i64) -> String {
        KeyGenerator::generate(self, "find_by_user_id", &[Some(&user_id)])
    }

    /// 새 주소를 저장하고 부여된 ID를 채워 반환합니다.
    pub async fn create(&self, mut address: Address) -> Result<Address, AppError> {
        let result = self.collection()
            .insert_one(&address)
            .await
            .map_err(db_error)?;

        let id = result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::InternalError("생성된 주소 ID를 읽을 수 없습니다".to_string()))?;
        address.assign_id(id);

        cache_evict(&self.redis, &[self.owner_key(address.user_id())]).await;
        info!("주소 생성: {}", address);

        Ok(address)
    }

    /// ID로 주소 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Address>, AppError> {
        let object_id = parse_object_id(id)?;
        let cache_key = Self::id_key(&object_id);

        if let Some(cached) = cache_get::<Address>(&self.redis, &cache_key).await {
            debug!("캐시 히트: {}", cache_key);
            return Ok(Some(cached));
        }

        let address = self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(db_error)?;

        if let Some(ref address) = address {
            cache_put(&self.redis, &cache_key, address, self.ttl_seconds).await;
        }

        Ok(address)
    }

    /// 소유 사용자의 모든 주소 조회 (캐시 우선)
    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Address>, AppError> {
        let cache_key = self.owner_key(user_id);

        if let Some(cached) = cache_get::<Vec<Address>>(&self.redis, &cache_key).await {
            debug!("캐시 히트: {}", cache_key);
            return Ok(cached);
        }

        let addresses: Vec<Address> = self.collection()
            .find(doc! { "user_id": user_id })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(db_error)?
            .try_collect()
            .await
            .map_err(db_error)?;

        cache_put(&self.redis, &cache_key, &addresses, self.ttl_seconds).await;

        Ok(addresses)
    }

    /// 검증을 통과한 주소 엔티티로 문서 전체를 교체합니다.
    ///
    /// 소유자가 바뀐 경우 이전 소유자의 목록 캐시도 무효화해야 하므로
    /// `previous_user_id`를 함께 받습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 교체됨
    /// * `Ok(false)` - 해당 ID의 문서가 없음
    pub async fn update(&self, address: &Address, previous_user_id: i64) -> Result<bool, AppError> {
        let object_id = address.id()
            .copied()
            .ok_or_else(|| AppError::ValidationError("저장되지 않은 주소는 수정할 수 없습니다".to_string()))?;

        let result = self.collection()
            .replace_one(doc! { "_id": object_id }, address)
            .await
            .map_err(db_error)?;

        if result.matched_count == 0 {
            return Ok(false);
        }

        let mut keys = vec![Self::id_key(&object_id), self.owner_key(address.user_id())];
        if previous_user_id != address.user_id() {
            keys.push(self.owner_key(previous_user_id));
        }
        cache_evict(&self.redis, &keys).await;

        Ok(true)
    }

    /// 주소를 삭제합니다. 삭제된 문서가 없으면 `false`를 반환합니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let deleted = self.collection()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(db_error)?;

        match deleted {
            Some(address) => {
                cache_evict(&self.redis, &[Self::id_key(&object_id), self.owner_key(address.user_id())]).await;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id_asc".to_string())
                .build())
            .build();

        self.collection()
            .create_index(user_id_index)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_key_ignores_hex_case() {
        let upper = parse_object_id("6650F0C2A1B2C3D4E5F60718").unwrap();
        let lower = parse_object_id("6650f0c2a1b2c3d4e5f60718").unwrap();

        assert_eq!(AddressRepository::id_key(&upper), AddressRepository::id_key(&lower));
        assert!(AddressRepository::id_key(&upper).ends_with("AddressRepository.find_by_id_6650f0c2a1b2c3d4e5f60718"));
    }
}
