//! 태그 엔티티 (`tags` 컬렉션)
//!
//! 태그는 사용자, 프로젝트, 작업 중 하나 이상에 연결됩니다. 연결 필드와 타임스탬프는
//! 내부 정보이므로 외부로 노출하기 전에 반드시 정제해야 합니다.

use mongodb::bson::{oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 태그 값
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<ObjectId>,
    #[serde(default = "crate::utils::time_utils::missing_timestamp")]
    pub created_at: DateTime,
    #[serde(default = "crate::utils::time_utils::missing_timestamp")]
    pub updated_at: DateTime,
    /// 소프트 삭제 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
    /// 스키마에 정의되지 않은 나머지 필드 (색상, 카테고리 등)
    #[serde(flatten)]
    pub extra: Document,
}

impl Tag {
    /// 사용자에게 연결된 새 태그를 생성합니다.
    pub fn for_user(user_id: ObjectId, value: impl Into<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: Some(ObjectId::new()),
            value: value.into(),
            user_id: Some(user_id),
            project_id: None,
            task_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            extra: Document::new(),
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
