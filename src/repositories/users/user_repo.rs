//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **페이지 조회**: 전체 건수를 세는 [`Page`]와 다음 페이지 여부만 아는 [`Slice`]
//! - **명시적 트랜잭션**: 이름 변경은 세션 트랜잭션과 30초 작업 제한 안에서 수행
//! - **데이터 무결성**: 유니크 제약 조건 및 인덱스 관리

use std::any::type_name;
use std::sync::Arc;
use std::time::Duration;

use futures_util::TryStreamExt;
use log::{debug, error, info};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    caching::{key_generator::KeyGenerator, redis::RedisClient},
    config::CacheConfig,
    db::Database,
    domain::entities::users::user::User,
    domain::models::page::{Page, PageRequest, Slice},
    errors::AppError,
    repositories::{cache_evict, cache_get, cache_put, db_error, parse_object_id, write_error},
};

const COLLECTION_NAME: &str = "users";

/// 이름 변경 작업의 최대 실행 시간
pub const MODIFY_TIMEOUT: Duration = Duration::from_secs(30);

/// 사용자 데이터 액세스 리포지토리
///
/// 이 리포지토리는 사용자 엔티티의 CRUD 연산을 담당하며,
/// MongoDB 컬렉션과 Redis 캐시를 통합하여 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// - **TTL**: `CACHE_TTL_SECONDS` (기본 600초)
/// - **키 패턴**:
///   - 개별 사용자: `<타입>.find_by_id_<id>`
///   - 이메일 조회: `<타입>.find_by_email_<email>`
///
/// 목록 조회는 캐싱하지 않습니다.
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류, 트랜잭션 실패
/// - **ValidationError**: 잘못된 ObjectId 형식
/// - **ConflictError**: 이메일/사용자명 중복
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database.clone(), redis.clone());
///
/// let created = repo.create(User::new(
///     "neo".to_string(),
///     "neo@example.com".to_string(),
///     password_hash,
///     "smile".to_string(),
/// )).await?;
///
/// let page = repo.find_by_nick_name("smile", PageRequest::new(Some(0), Some(10))).await?;
/// ```
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
    ttl_seconds: u64,
}

impl UserRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self {
            db,
            redis,
            ttl_seconds: CacheConfig::ttl_seconds(),
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 파싱된 ID의 소문자 hex로 키를 만듭니다.
    fn id_key(id: &ObjectId) -> String {
        KeyGenerator::generate_for_type(type_name::<Self>(), "find_by_id", &[Some(&id.to_hex())])
    }

    fn email_key(&self, email: &str) -> String {
        KeyGenerator::generate(self, "find_by_email", &[Some(&email)])
    }

    /// 사용자의 모든 캐시 키
    fn keys_of(&self, user: &User) -> Vec<String> {
        let mut keys = vec![self.email_key(&user.email)];
        if let Some(id) = user.id.as_ref() {
            keys.push(Self::id_key(id));
        }
        keys
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 캐시 우선 조회를 통해 성능을 최적화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let cache_key = self.email_key(email);

        if let Some(cached) = cache_get::<User>(&self.redis, &cache_key).await {
            debug!("캐시 히트: {}", cache_key);
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(db_error)?;

        if let Some(ref user) = user {
            cache_put(&self.redis, &cache_key, user, self.ttl_seconds).await;
        }

        Ok(user)
    }

    /// 사용자명으로 사용자 조회
    ///
    /// 사용자명은 유니크하므로 최대 1개의 결과만 반환됩니다.
    /// 조회 빈도가 낮아 캐싱하지 않습니다.
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "user_name": user_name })
            .await
            .map_err(db_error)
    }

    /// 사용자명 또는 이메일이 일치하는 사용자 조회
    ///
    /// 로그인 식별자가 어느 쪽인지 모를 때 사용합니다.
    pub async fn find_by_user_name_or_email(&self, user_name: &str, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! {
                "$or": [
                    { "user_name": user_name },
                    { "email": email },
                ]
            })
            .await
            .map_err(db_error)
    }

    /// ID로 사용자 조회 (캐시 우선)
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;
        let cache_key = Self::id_key(&object_id);

        if let Some(cached) = cache_get::<User>(&self.redis, &cache_key).await {
            debug!("캐시 히트: {}", cache_key);
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(db_error)?;

        if let Some(ref user) = user {
            cache_put(&self.redis, &cache_key, user, self.ttl_seconds).await;
        }

        Ok(user)
    }

    /// 새 사용자 생성
    ///
    /// 이메일과 사용자명의 중복 여부를 사전에 검증합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 또는 사용자명 중복
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        if self.find_by_user_name(&user.user_name).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(write_error("이미 사용 중인 이메일 또는 사용자명입니다"))?;

        user.id = Some(result.inserted_id.as_object_id()
            .ok_or_else(|| AppError::InternalError("생성된 사용자 ID를 읽을 수 없습니다".to_string()))?);

        info!("사용자 생성: {} ({})", user.user_name, user.email);

        Ok(user)
    }

    /// 사용자명을 변경합니다.
    ///
    /// 세션 트랜잭션 안에서 실행되며 작업 시간은 [`MODIFY_TIMEOUT`]으로 제한됩니다.
    /// 어느 단계에서든 실패하면 트랜잭션을 중단하고 에러를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 변경 후의 사용자
    /// * `Ok(None)` - 해당 ID의 사용자가 없음
    /// * `Err(AppError::ConflictError)` - 다른 사용자가 이미 쓰는 이름
    pub async fn modify_by_id(&self, id: &str, user_name: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        let mut session = self.db.client()
            .start_session()
            .await
            .map_err(db_error)?;
        session.start_transaction().await.map_err(db_error)?;

        let taken = self.collection()
            .find_one(doc! { "user_name": user_name, "_id": { "$ne": object_id } })
            .session(&mut session)
            .await;

        let outcome = match taken {
            Ok(Some(_)) => Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())),
            Ok(None) => {
                let options = FindOneAndUpdateOptions::builder()
                    .return_document(ReturnDocument::After)
                    .max_time(MODIFY_TIMEOUT)
                    .build();

                self.collection()
                    .find_one_and_update(
                        doc! { "_id": object_id },
                        doc! { "$set": { "user_name": user_name } },
                    )
                    .with_options(options)
                    .session(&mut session)
                    .await
                    .map_err(write_error("이미 사용 중인 사용자명입니다"))
            }
            Err(e) => Err(db_error(e)),
        };

        let updated = match outcome {
            Ok(updated) => updated,
            Err(e) => {
                if let Err(abort_err) = session.abort_transaction().await {
                    error!("트랜잭션 중단 실패: {}", abort_err);
                }
                return Err(e);
            }
        };

        session.commit_transaction().await.map_err(db_error)?;

        if let Some(ref user) = updated {
            cache_evict(&self.redis, &self.keys_of(user)).await;
            info!("사용자명 변경: {} -> {}", id, user.user_name);
        }

        Ok(updated)
    }

    /// 사용자 삭제
    ///
    /// 삭제된 문서로 이메일 캐시 키까지 함께 무효화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 사용자가 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let deleted = self.collection()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(db_error)?;

        match deleted {
            Some(user) => {
                cache_evict(&self.redis, &self.keys_of(&user)).await;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 가입 순서로 정렬된 전체 사용자 페이지
    pub async fn find_all(&self, request: PageRequest) -> Result<Page<User>, AppError> {
        self.find_page(doc! {}, request).await
    }

    /// 닉네임이 일치하는 사용자 페이지
    pub async fn find_by_nick_name(&self, nick_name: &str, request: PageRequest) -> Result<Page<User>, AppError> {
        self.find_page(doc! { "nick_name": nick_name }, request).await
    }

    /// 닉네임과 이메일이 모두 일치하는 사용자 슬라이스
    ///
    /// 전체 건수를 세지 않고 `size + 1`개를 읽어 다음 페이지 여부를 판단합니다.
    pub async fn find_by_nick_name_and_email(
        &self,
        nick_name: &str,
        email: &str,
        request: PageRequest,
    ) -> Result<Slice<User>, AppError> {
        let limit = i64::try_from(request.size.saturating_add(1)).unwrap_or(i64::MAX);

        let users: Vec<User> = self.collection()
            .find(doc! { "nick_name": nick_name, "email": email })
            .sort(doc! { "reg_time": 1, "_id": 1 })
            .skip(request.offset())
            .limit(limit)
            .await
            .map_err(db_error)?
            .try_collect()
            .await
            .map_err(db_error)?;

        Ok(Slice::from_overfetched(users, request))
    }

    async fn find_page(&self, filter: Document, request: PageRequest) -> Result<Page<User>, AppError> {
        let total = self.collection()
            .count_documents(filter.clone())
            .await
            .map_err(db_error)?;

        let limit = i64::try_from(request.size).unwrap_or(i64::MAX);

        let users: Vec<User> = self.collection()
            .find(filter)
            .sort(doc! { "reg_time": 1, "_id": 1 })
            .skip(request.offset())
            .limit(limit)
            .await
            .map_err(db_error)?
            .try_collect()
            .await
            .map_err(db_error)?;

        Ok(Page::new(users, request, total))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. `email` 유니크 인덱스
    /// 2. `user_name` 유니크 인덱스
    /// 3. `nick_name` + `email` 복합 인덱스 (닉네임 검색과 슬라이스 조회)
    ///
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let user_name_index = IndexModel::builder()
            .keys(doc! { "user_name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_name_unique".to_string())
                .build())
            .build();

        let nick_name_index = IndexModel::builder()
            .keys(doc! { "nick_name": 1, "email": 1 })
            .options(IndexOptions::builder()
                .name("nick_name_email".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, user_name_index, nick_name_index])
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
