//! # 사용자 상세 정보 서비스
//!
//! 응답은 항상 [`UserDetailResponse`]로 변환되므로 사용자 ID와
//! 마지막 접속 IP는 마스킹된 상태로만 외부에 나갑니다.

use std::sync::Arc;

use log::info;

use crate::{
    domain::{
        dto::user_details::{CreateUserDetailRequest, UserDetailResponse},
        entities::user_details::UserDetail,
    },
    errors::AppError,
    repositories::user_details::UserDetailRepository,
};

/// 사용자 상세 정보 비즈니스 로직 서비스
pub struct UserDetailService {
    detail_repo: Arc<UserDetailRepository>,
}

impl UserDetailService {
    pub fn new(detail_repo: Arc<UserDetailRepository>) -> Self {
        Self { detail_repo }
    }

    /// 상세 정보 생성
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 불변식 위반 또는 알 수 없는 상태값
    /// * `ConflictError` - 이미 등록된 사용자 ID
    pub async fn create_detail(&self, request: CreateUserDetailRequest) -> Result<UserDetailResponse, AppError> {
        let detail = UserDetail::try_from(request)?;
        let created = self.detail_repo.create(detail).await?;

        Ok(UserDetailResponse::from(created))
    }

    pub async fn get_detail(&self, user_id: &str) -> Result<UserDetailResponse, AppError> {
        let detail = self.find(user_id).await?;
        Ok(UserDetailResponse::from(detail))
    }

    /// 텍스트로 상태를 변경합니다.
    ///
    /// 알 수 없는 값이면 `Invalid status value: <text>` 검증 에러를 반환하고
    /// 저장된 상태는 바뀌지 않습니다.
    pub async fn change_status(&self, user_id: &str, status: &str) -> Result<UserDetailResponse, AppError> {
        let mut detail = self.find(user_id).await?;
        let previous = detail.status();

        detail.set_status(status)?;

        if !self.detail_repo.update(&detail).await? {
            return Err(AppError::NotFound("사용자 상세 정보를 찾을 수 없습니다".to_string()));
        }

        info!(
            "사용자 상태 변경: {} ({} -> {})",
            detail.masked_user_id().unwrap_or_default(),
            previous.unwrap_or("null"),
            status
        );

        Ok(UserDetailResponse::from(detail))
    }

    pub async fn delete_detail(&self, user_id: &str) -> Result<(), AppError> {
        if !self.detail_repo.delete_by_user_id(user_id).await? {
            return Err(AppError::NotFound("삭제할 사용자 상세 정보를 찾을 수 없습니다".to_string()));
        }
        Ok(())
    }

    async fn find(&self, user_id: &str) -> Result<UserDetail, AppError> {
        self.detail_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자 상세 정보를 찾을 수 없습니다".to_string()))
    }
}
