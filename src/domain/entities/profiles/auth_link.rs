//! 인증 프로바이더 연결 엔티티 (`user_auths` 컬렉션)

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자와 외부 인증 프로바이더("google", "github" 등)의 연결
///
/// 사용자당 프로바이더별로 최대 하나의 연결이 존재합니다.
/// 연결 생성은 인증 서비스가 담당하며 이 서비스는 조회와 삭제만 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthLink {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유 사용자 ID
    pub user_id: ObjectId,
    /// 프로바이더 이름
    pub provider: String,
    /// 연결 시간
    #[serde(default = "crate::utils::time_utils::missing_timestamp")]
    pub created_at: DateTime,
}

impl AuthLink {
    pub fn new(user_id: ObjectId, provider: impl Into<String>) -> Self {
        Self {
            id: Some(ObjectId::new()),
            user_id,
            provider: provider.into(),
            created_at: DateTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_link_without_created_at_decodes() {
        let user_id = ObjectId::new();
        let document = doc! { "_id": ObjectId::new(), "user_id": user_id, "provider": "google" };

        let link: AuthLink = mongodb::bson::from_document(document).unwrap();

        assert_eq!(link.user_id, user_id);
        assert_eq!(link.provider, "google");
        assert_eq!(link.created_at.timestamp_millis(), 0);
    }
}
