//! 외부 노출용 태그
//!
//! 연결 필드(`userId`, `projectId`, `taskId`)와 `updatedAt`, `deletedAt`은
//! 어떤 형태로 저장되어 있어도 응답에 포함되지 않습니다.

use chrono::{DateTime, Utc};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use crate::domain::entities::tags::Tag;
use crate::utils::time_utils::to_utc;

/// 정제 시 제거하는 키 (저장 형식과 응답 형식 모두)
pub const STRIPPED_TAG_KEYS: [&str; 10] = [
    "projectId", "taskId", "updatedAt", "deletedAt", "userId",
    "project_id", "task_id", "updated_at", "deleted_at", "user_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagView {
    pub id: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    /// 저장된 나머지 필드 (그대로 전달)
    #[serde(flatten)]
    pub extra: Document,
}

impl From<Tag> for TagView {
    fn from(tag: Tag) -> Self {
        let Tag {
            id,
            value,
            created_at,
            mut extra,
            ..
        } = tag;

        for key in STRIPPED_TAG_KEYS {
            extra.remove(key);
        }

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            value,
            created_at: to_utc(created_at),
            extra,
        }
    }
}
