//! # 주소 관리 서비스
//!
//! 요청 DTO를 [`Address`] 엔티티로 변환하면서 필드 불변식을 적용하고,
//! 저장은 [`AddressRepository`]에 위임합니다.

use std::sync::Arc;

use log::info;

use crate::{
    domain::{
        dto::addresses::{AddressResponse, CreateAddressRequest, UpdateAddressRequest},
        entities::addresses::{Address, AddressPatch},
    },
    errors::AppError,
    repositories::addresses::AddressRepository,
};

/// 주소 비즈니스 로직 서비스
pub struct AddressService {
    address_repo: Arc<AddressRepository>,
}

impl AddressService {
    pub fn new(address_repo: Arc<AddressRepository>) -> Self {
        Self { address_repo }
    }

    /// 새 주소 생성
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 필드 불변식 위반 (예: `Province cannot be null or empty`)
    pub async fn create_address(&self, request: CreateAddressRequest) -> Result<AddressResponse, AppError> {
        let address = Address::try_from(request)?;
        let created = self.address_repo.create(address).await?;

        Ok(AddressResponse::from(created))
    }

    pub async fn get_address(&self, id: &str) -> Result<AddressResponse, AppError> {
        let address = self.address_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("주소를 찾을 수 없습니다".to_string()))?;

        Ok(AddressResponse::from(address))
    }

    pub async fn list_addresses(&self, user_id: i64) -> Result<Vec<AddressResponse>, AppError> {
        let addresses = self.address_repo.find_by_user_id(user_id).await?;

        Ok(addresses.into_iter().map(AddressResponse::from).collect())
    }

    /// 주소 부분 수정
    ///
    /// 모든 변경값을 먼저 검증한 뒤 한 번에 반영합니다.
    /// 하나라도 위반하면 저장된 주소는 그대로 남습니다.
    pub async fn update_address(&self, id: &str, request: UpdateAddressRequest) -> Result<AddressResponse, AppError> {
        let patch = AddressPatch::from(request);
        if patch.is_empty() {
            return Err(AppError::ValidationError("수정할 필드가 없습니다".to_string()));
        }

        let mut address = self.address_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("주소를 찾을 수 없습니다".to_string()))?;

        let previous_user_id = address.user_id();
        address.apply(patch)?;

        if !self.address_repo.update(&address, previous_user_id).await? {
            return Err(AppError::NotFound("주소를 찾을 수 없습니다".to_string()));
        }

        info!("주소 수정: {}", address);

        Ok(AddressResponse::from(address))
    }

    pub async fn delete_address(&self, id: &str) -> Result<(), AppError> {
        if !self.address_repo.delete(id).await? {
            return Err(AppError::NotFound("삭제할 주소를 찾을 수 없습니다".to_string()));
        }

        info!("주소 삭제: {}", id);

        Ok(())
    }
}
