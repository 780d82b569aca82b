//! # 사용자 상세 정보 리포지토리 구현
//!
//! `user_details` 컬렉션을 다룹니다. 한 사용자 ID에는 문서가 하나만 존재하며,
//! 이 제약은 유니크 인덱스와 생성 전 중복 확인으로 함께 지킵니다.
//!
//! 읽어온 문서는 빈 엔티티로 채워지므로 호출자에게 넘기기 전에
//! [`UserDetail::validate`]로 검증합니다.

use std::sync::Arc;

use log::{debug, info, warn};
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    caching::{key_generator::KeyGenerator, redis::RedisClient},
    config::CacheConfig,
    db::Database,
    domain::entities::user_details::UserDetail,
    errors::AppError,
    repositories::{cache_evict, cache_get, cache_put, db_error, write_error},
};

const COLLECTION_NAME: &str = "user_details";

/// 사용자 상세 정보 데이터 액세스 리포지토리
///
/// 캐시 키는 `find_by_user_id` 하나이며 쓰기 연산마다 무효화됩니다.
pub struct UserDetailRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
    ttl_seconds: u64,
}

impl UserDetailRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self {
            db,
            redis,
            ttl_seconds: CacheConfig::ttl_seconds(),
        }
    }

    fn collection(&self) -> Collection<UserDetail> {
        self.db.get_database().collection::<UserDetail>(COLLECTION_NAME)
    }

    fn user_key(&self, user_id: &str) -> String {
        KeyGenerator::generate(self, "find_by_user_id", &[Some(&user_id)])
    }

    /// 로드한 문서를 검증합니다. 규칙을 어긴 문서는 검증 에러가 됩니다.
    fn loaded(detail: UserDetail) -> Result<UserDetail, AppError> {
        detail.validate().map_err(|violation| {
            warn!("저장된 사용자 상세 문서가 불변식을 위반함: {}", violation);
            AppError::from(violation)
        })?;
        Ok(detail)
    }

    /// 새 상세 정보를 저장합니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 같은 사용자 ID의 문서가 이미 있음
    pub async fn create(&self, mut detail: UserDetail) -> Result<UserDetail, AppError> {
        let user_id = detail.user_id()
            .ok_or_else(|| AppError::ValidationError("userId cannot be null".to_string()))?
            .to_string();

        let existing = self.collection()
            .find_one(doc! { "user_id": user_id.as_str() })
            .await
            .map_err(db_error)?;
        if existing.is_some() {
            return Err(AppError::ConflictError("이미 상세 정보가 등록된 사용자입니다".to_string()));
        }

        let result = self.collection()
            .insert_one(&detail)
            .await
            .map_err(write_error("이미 상세 정보가 등록된 사용자입니다"))?;

        let id = result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::InternalError("생성된 상세 정보 ID를 읽을 수 없습니다".to_string()))?;
        detail.assign_id(id);

        info!("사용자 상세 정보 생성: {}", detail);

        Ok(detail)
    }

    /// 사용자 ID로 상세 정보 조회 (캐시 우선)
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserDetail>, AppError> {
        let cache_key = self.user_key(user_id);

        if let Some(cached) = cache_get::<UserDetail>(&self.redis, &cache_key).await {
            debug!("캐시 히트: {}", cache_key);
            return Self::loaded(cached).map(Some);
        }

        let detail = self.collection()
            .find_one(doc! { "user_id": user_id })
            .await
            .map_err(db_error)?;

        match detail {
            Some(detail) => {
                let detail = Self::loaded(detail)?;
                cache_put(&self.redis, &cache_key, &detail, self.ttl_seconds).await;
                Ok(Some(detail))
            }
            None => Ok(None),
        }
    }

    /// 변경된 엔티티로 문서를 교체합니다. 일치하는 문서가 없으면 `false`.
    pub async fn update(&self, detail: &UserDetail) -> Result<bool, AppError> {
        detail.validate()?;
        let object_id = detail.id()
            .copied()
            .ok_or_else(|| AppError::ValidationError("저장되지 않은 상세 정보는 수정할 수 없습니다".to_string()))?;

        let result = self.collection()
            .replace_one(doc! { "_id": object_id }, detail)
            .await
            .map_err(db_error)?;

        if result.matched_count == 0 {
            return Ok(false);
        }

        if let Some(user_id) = detail.user_id() {
            cache_evict(&self.redis, &[self.user_key(user_id)]).await;
        }

        Ok(true)
    }

    pub async fn delete_by_user_id(&self, user_id: &str) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "user_id": user_id })
            .await
            .map_err(db_error)?;

        cache_evict(&self.redis, &[self.user_key(user_id)]).await;

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(user_id_index)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
