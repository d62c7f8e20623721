//! 태그 조회 범위
//!
//! 지정된 조건은 모두 AND로 결합되며, 조건이 없는 필터는 삭제되지 않은 전체 태그와 일치합니다.

use mongodb::bson::{doc, oid::ObjectId, Document};
use crate::core::{AppError, AppResult};
use crate::domain::entities::tags::Tag;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagFilter {
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
}

fn parse_scope(field: &str, value: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(value)
        .map_err(|_| AppError::ValidationError(format!("잘못된 {} 형식입니다: {}", field, value)))
}

fn scope_matches(expected: &Option<String>, actual: &Option<ObjectId>) -> bool {
    match expected {
        Some(expected) => actual.map(|id| id.to_hex()).as_deref() == Some(expected.as_str()),
        None => true,
    }
}

impl TagFilter {
    /// 사용자 범위 필터
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// MongoDB 조회 조건으로 변환합니다. 소프트 삭제된 태그는 항상 제외됩니다.
    ///
    /// # Errors
    ///
    /// 범위 ID가 ObjectId 형식이 아니면 `ValidationError`를 반환합니다.
    pub fn to_document(&self) -> AppResult<Document> {
        let mut filter = doc! { "deleted_at": null };

        if let Some(user_id) = &self.user_id {
            filter.insert("user_id", parse_scope("user_id", user_id)?);
        }
        if let Some(project_id) = &self.project_id {
            filter.insert("project_id", parse_scope("project_id", project_id)?);
        }
        if let Some(task_id) = &self.task_id {
            filter.insert("task_id", parse_scope("task_id", task_id)?);
        }

        Ok(filter)
    }

    /// 메모리 상의 태그가 필터와 일치하는지 확인합니다.
    pub fn matches(&self, tag: &Tag) -> bool {
        !tag.is_deleted()
            && scope_matches(&self.user_id, &tag.user_id)
            && scope_matches(&self.project_id, &tag.project_id)
            && scope_matches(&self.task_id, &tag.task_id)
    }
}
