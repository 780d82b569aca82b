//! Address Entity Implementation
//!
//! 모든 생성 경로와 setter에서 필드 불변식을 즉시 검증하는 주소 엔티티입니다.
//! 잘못된 값은 잠시라도 엔티티에 들어갈 수 없습니다.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::guards::{require_positive, require_present, require_text, FieldViolation};

/// 도(province) 최대 길이
pub const PROVINCE_MAX_LEN: usize = 50;
/// 시(city) 최대 길이
pub const CITY_MAX_LEN: usize = 50;
/// 도로명(street) 최대 길이
pub const STREET_MAX_LEN: usize = 100;

/// 주소 엔티티
///
/// MongoDB `addresses` 컬렉션의 문서와 1:1로 매핑됩니다.
/// 필드는 모두 비공개이며, 값 변경은 검증을 거치는 setter로만 가능합니다.
///
/// 역직렬화(저장소 하이드레이션, 캐시 조회)도 생성자와 동일한 검증을 거칩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AddressDocument")]
pub struct Address {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    /// 소유 사용자 ID
    user_id: i64,
    province: String,
    city: String,
    street: String,
}

/// 저장소에서 읽어온 가공 전 문서
///
/// 누락된 필드를 표현할 수 있도록 모든 필드가 `Option`입니다.
#[derive(Deserialize)]
struct AddressDocument {
    #[serde(rename = "_id", default)]
    id: Option<ObjectId>,
    #[serde(default)]
    user_id: Option<i64>,
    #[serde(default)]
    province: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    street: Option<String>,
}

impl TryFrom<AddressDocument> for Address {
    type Error = FieldViolation;

    fn try_from(doc: AddressDocument) -> Result<Self, Self::Error> {
        let user_id = require_present("User ID", doc.user_id)?;
        let province = doc.province.ok_or(FieldViolation::Blank { field: "Province" })?;
        let city = doc.city.ok_or(FieldViolation::Blank { field: "City" })?;
        let street = doc.street.ok_or(FieldViolation::Blank { field: "Street" })?;

        let mut address = Address::new(user_id, province, city, street)?;
        address.id = doc.id;
        Ok(address)
    }
}

/// 주소 부분 수정 요청
///
/// `None` 필드는 변경하지 않습니다. 값이 있는 필드는 setter와 동일한
/// 검증을 거치며, 하나라도 실패하면 아무 필드도 변경되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPatch {
    pub user_id: Option<i64>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
}

impl AddressPatch {
    /// 변경할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.province.is_none()
            && self.city.is_none()
            && self.street.is_none()
    }
}

impl Address {
    /// 새 주소를 생성합니다.
    ///
    /// 네 필드를 모두 검증한 뒤에만 엔티티를 만듭니다. ID는 저장 시 부여됩니다.
    ///
    /// # Errors
    ///
    /// 소유 사용자 ID가 양수가 아니거나, 도/시/도로명이 공백이거나 최대 길이를
    /// 넘으면 [`FieldViolation`]을 반환합니다.
    pub fn new(
        user_id: i64,
        province: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
    ) -> Result<Self, FieldViolation> {
        let province = province.into();
        let city = city.into();
        let street = street.into();

        require_positive("User ID", user_id)?;
        require_text("Province", &province, PROVINCE_MAX_LEN)?;
        require_text("City", &city, CITY_MAX_LEN)?;
        require_text("Street", &street, STREET_MAX_LEN)?;

        Ok(Self {
            id: None,
            user_id,
            province,
            city,
            street,
        })
    }

    pub fn id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 저장소가 생성 직후 부여한 ID를 기록합니다.
    pub(crate) fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    /// 소유 사용자 ID를 변경합니다. 값이 있으면 항상 성공합니다.
    pub fn set_user_id(&mut self, user_id: i64) {
        self.user_id = user_id;
    }

    pub fn set_province(&mut self, province: impl Into<String>) -> Result<(), FieldViolation> {
        let province = province.into();
        require_text("Province", &province, PROVINCE_MAX_LEN)?;
        self.province = province;
        Ok(())
    }

    pub fn set_city(&mut self, city: impl Into<String>) -> Result<(), FieldViolation> {
        let city = city.into();
        require_text("City", &city, CITY_MAX_LEN)?;
        self.city = city;
        Ok(())
    }

    pub fn set_street(&mut self, street: impl Into<String>) -> Result<(), FieldViolation> {
        let street = street.into();
        require_text("Street", &street, STREET_MAX_LEN)?;
        self.street = street;
        Ok(())
    }

    /// 여러 필드를 한 번에 수정합니다.
    ///
    /// 모든 값을 먼저 검증하고, 전부 통과한 경우에만 대입합니다.
    pub fn apply(&mut self, patch: AddressPatch) -> Result<(), FieldViolation> {
        if let Some(province) = &patch.province {
            require_text("Province", province, PROVINCE_MAX_LEN)?;
        }
        if let Some(city) = &patch.city {
            require_text("City", city, CITY_MAX_LEN)?;
        }
        if let Some(street) = &patch.street {
            require_text("Street", street, STREET_MAX_LEN)?;
        }

        let AddressPatch { user_id, province, city, street } = patch;

        if let Some(user_id) = user_id {
            self.user_id = user_id;
        }
        if let Some(province) = province {
            self.province = province;
        }
        if let Some(city) = city {
            self.city = city;
        }
        if let Some(street) = street {
            self.street = street;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Address(id={}, userId={}, province={}, city={}, street={})",
            self.id_string().unwrap_or_else(|| "null".to_string()),
            self.user_id,
            self.province,
            self.city,
            self.street
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address::new(1, "경기도", "성남시", "판교역로 235").unwrap()
    }

    #[test]
    fn test_new_keeps_assigned_values() {
        let address = sample();

        assert_eq!(address.user_id(), 1);
        assert_eq!(address.province(), "경기도");
        assert_eq!(address.city(), "성남시");
        assert_eq!(address.street(), "판교역로 235");
        assert!(address.id().is_none());
    }

    #[test]
    fn test_new_rejects_blank_fields() {
        assert_eq!(
            Address::new(1, "  ", "성남시", "판교역로").unwrap_err(),
            FieldViolation::Blank { field: "Province" }
        );
        assert_eq!(
            Address::new(1, "경기도", "", "판교역로").unwrap_err(),
            FieldViolation::Blank { field: "City" }
        );
        assert_eq!(
            Address::new(1, "경기도", "성남시", "\t").unwrap_err(),
            FieldViolation::Blank { field: "Street" }
        );
    }

    #[test]
    fn test_new_rejects_non_positive_user_id() {
        assert_eq!(
            Address::new(0, "경기도", "성남시", "판교역로").unwrap_err(),
            FieldViolation::NotPositive { field: "User ID" }
        );
        assert!(Address::new(-5, "경기도", "성남시", "판교역로").is_err());
    }

    #[test]
    fn test_new_rejects_over_length() {
        let err = Address::new(1, "경기도", "성남시", "a".repeat(101)).unwrap_err();
        assert_eq!(err, FieldViolation::TooLong { field: "Street", max: 100 });
    }

    #[test]
    fn test_setters_keep_values_at_limits() {
        let mut address = sample();

        address.set_province("p".repeat(PROVINCE_MAX_LEN)).unwrap();
        address.set_city("c".repeat(CITY_MAX_LEN)).unwrap();
        address.set_street("s".repeat(STREET_MAX_LEN)).unwrap();

        assert_eq!(address.province().len(), 50);
        assert_eq!(address.city().len(), 50);
        assert_eq!(address.street().len(), 100);
    }

    #[test]
    fn test_failed_setter_keeps_previous_value() {
        let mut address = sample();

        assert!(address.set_province("   ").is_err());
        assert!(address.set_city("c".repeat(51)).is_err());
        assert!(address.set_street("").is_err());

        assert_eq!(address.province(), "경기도");
        assert_eq!(address.city(), "성남시");
        assert_eq!(address.street(), "판교역로 235");
    }

    #[test]
    fn test_set_user_id_always_succeeds() {
        let mut address = sample();
        address.set_user_id(42);
        assert_eq!(address.user_id(), 42);
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut address = sample();
        let patch = AddressPatch {
            user_id: Some(9),
            province: Some("서울특별시".to_string()),
            city: Some("".to_string()),
            street: None,
        };

        let err = address.apply(patch).unwrap_err();

        assert_eq!(err, FieldViolation::Blank { field: "City" });
        assert_eq!(address, sample());
    }

    #[test]
    fn test_apply_updates_present_fields_only() {
        let mut address = sample();
        address
            .apply(AddressPatch {
                city: Some("수원시".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(address.city(), "수원시");
        assert_eq!(address.province(), "경기도");
        assert_eq!(address.user_id(), 1);
    }

    #[test]
    fn test_hydration_validates_like_constructor() {
        let json = r#"{"user_id": 3, "province": "경기도", "city": "성남시", "street": "판교역로"}"#;
        let address: Address = serde_json::from_str(json).unwrap();
        assert_eq!(address.user_id(), 3);

        let missing_user = r#"{"province": "경기도", "city": "성남시", "street": "판교역로"}"#;
        let err = serde_json::from_str::<Address>(missing_user).unwrap_err();
        assert!(err.to_string().contains("User ID cannot be null"));

        let blank_city = r#"{"user_id": 3, "province": "경기도", "city": " ", "street": "판교역로"}"#;
        let err = serde_json::from_str::<Address>(blank_city).unwrap_err();
        assert!(err.to_string().contains("City cannot be null or empty"));

        let null_street = r#"{"user_id": 3, "province": "경기도", "city": "성남시", "street": null}"#;
        assert!(serde_json::from_str::<Address>(null_street).is_err());

        let negative_user = r#"{"user_id": -5, "province": "경기도", "city": "성남시", "street": "판교역로"}"#;
        let err = serde_json::from_str::<Address>(negative_user).unwrap_err();
        assert!(err.to_string().contains("User ID must be positive"));
    }

    #[test]
    fn test_serialized_document_round_trips_through_validation() {
        let mut address = sample();
        address.assign_id(ObjectId::new());

        let json = serde_json::to_string(&address).unwrap();
        let restored: Address = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, address);
    }
}
