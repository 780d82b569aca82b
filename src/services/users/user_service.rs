//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      UserService                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  Registration        │  Query            │  Management  │
//! │  • Password Hash     │  • By ID / Login  │  • Rename    │
//! │  • Duplicate Check   │  • Page / Slice   │  • Delete    │
//! │  • Welcome Mail      │  • Entity → DTO   │              │
//! └─────────────────────────────────────────────────────────┘
//!                  │                        │
//!                  ▼                        ▼
//!        ┌──────────────────┐     ┌──────────────────┐
//!        │  UserRepository  │     │   MailService    │
//!        │ MongoDB + Redis  │     │  (optional)      │
//!        └──────────────────┘     └──────────────────┘
//! ```
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost ([`PasswordConfig`])
//! - **민감 정보 제거**: 응답 DTO에는 비밀번호 해시가 없음

use std::sync::Arc;
use std::time::Instant;

use bcrypt::hash;
use log::{info, warn};

use crate::{
    config::PasswordConfig,
    domain::{
        dto::users::{
            request::{CreateUserRequest, ModifyUserNameRequest, UserListQuery, UserSliceQuery},
            response::{CreateUserResponse, UserResponse},
        },
        entities::users::user::User,
        models::page::{Page, PageRequest, Slice},
    },
    errors::AppError,
    repositories::users::UserRepository,
    services::mail::MailService,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 메일 서비스가 주어지면 가입 직후 환영 메일을 백그라운드로 발송합니다.
/// 메일 발송 결과는 가입 응답에 영향을 주지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(user_repo.clone(), Some(mail.clone()));
///
/// let response = service.create_user(CreateUserRequest {
///     user_name: "neo".to_string(),
///     email: "neo@example.com".to_string(),
///     password: "SecurePass123".to_string(),
///     nick_name: "smile".to_string(),
/// }).await?;
/// ```
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
    mail: Option<Arc<MailService>>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, mail: Option<Arc<MailService>>) -> Self {
        Self { user_repo, mail }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **비밀번호 해싱**: bcrypt, 환경별 cost
    /// 2. **영구 저장**: 이메일/사용자명 중복 시 `ConflictError`
    /// 3. **환영 메일**: 메일 서비스가 있으면 백그라운드 발송
    ///
    /// # 로깅
    ///
    /// ```text
    /// [INFO] Password hashing took: 156ms
    /// [INFO] Total user creation took: 234ms
    /// ```
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, AppError> {
        let start_time = Instant::now();

        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.user_name, request.email, password_hash, request.nick_name);
        let created_user = self.user_repo.create(user).await?;

        self.send_welcome_mail(&created_user);

        info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    fn send_welcome_mail(&self, user: &User) {
        let Some(mail) = self.mail.clone() else {
            return;
        };
        let to = user.email.clone();
        let nick_name = user.nick_name.clone();

        actix_web::rt::spawn(async move {
            if let Err(e) = mail.send_welcome_mail(&to, &nick_name).await {
                warn!("환영 메일 발송 실패: {}", e);
            }
        });
    }

    /// ID로 사용자 조회
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자명 또는 이메일로 사용자 조회
    pub async fn get_user_by_login(&self, login: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_user_name_or_email(login, login)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 목록 페이지. 닉네임이 주어지면 일치하는 사용자만 조회합니다.
    pub async fn list_users(&self, query: UserListQuery) -> Result<Page<UserResponse>, AppError> {
        let request = PageRequest::new(query.page, query.size);

        let page = match query.nick_name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(nick_name) => self.user_repo.find_by_nick_name(nick_name, request).await?,
            None => self.user_repo.find_all(request).await?,
        };

        Ok(page.map(UserResponse::from))
    }

    /// 닉네임과 이메일이 모두 일치하는 사용자 슬라이스
    pub async fn slice_users(&self, query: UserSliceQuery) -> Result<Slice<UserResponse>, AppError> {
        let request = PageRequest::new(query.page, query.size);
        let slice = self.user_repo
            .find_by_nick_name_and_email(&query.nick_name, &query.email, request)
            .await?;

        Ok(slice.map(UserResponse::from))
    }

    /// 사용자명 변경
    pub async fn modify_user_name(&self, id: &str, request: ModifyUserNameRequest) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .modify_by_id(id, &request.user_name)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 삭제
    ///
    /// 물리적 삭제이며 복구할 수 없습니다.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete_by_id(id).await?;

        if !deleted {
            return Err(AppError::NotFound("삭제할 사용자를 찾을 수 없습니다".to_string()));
        }

        info!("사용자 삭제: {}", id);

        Ok(())
    }
}
