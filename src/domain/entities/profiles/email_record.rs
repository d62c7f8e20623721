//! 등록 이메일 엔티티 (`user_emails` 컬렉션)

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자가 등록한 이메일 주소. 이 서비스에서는 읽기 전용입니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub address: String,
    /// 인증 완료 여부
    #[serde(default)]
    pub verified: bool,
    #[serde(default = "crate::utils::time_utils::missing_timestamp")]
    pub created_at: DateTime,
}

impl EmailRecord {
    pub fn new(user_id: ObjectId, address: impl Into<String>) -> Self {
        Self {
            id: Some(ObjectId::new()),
            user_id,
            address: address.into(),
            verified: false,
            created_at: DateTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_record_without_created_at_decodes() {
        let document = doc! { "user_id": ObjectId::new(), "address": "a@example.com" };

        let record: EmailRecord = mongodb::bson::from_document(document).unwrap();

        assert!(!record.verified);
        assert_eq!(record.created_at.timestamp_millis(), 0);
    }
}
