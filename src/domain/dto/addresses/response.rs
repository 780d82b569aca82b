//! 주소 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::addresses::Address;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressResponse {
    pub id: String,
    pub user_id: i64,
    pub province: String,
    pub city: String,
    pub street: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id_string().unwrap_or_default(),
            user_id: address.user_id(),
            province: address.province().to_string(),
            city: address.city().to_string(),
            street: address.street().to_string(),
        }
    }
}
