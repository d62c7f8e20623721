//! # 태그 리포지토리
//!
//! `tags` 컬렉션에 대한 [`TagAssembler`] 구현입니다. 범위 필터를 MongoDB 조건으로 바꾸어
//! 삭제되지 않은 태그를 생성 순으로 반환합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, Document}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{registry::Repository, AppError, AppResult},
    db::Database,
    domain::{entities::tags::Tag, models::tags::TagFilter},
    repositories::stores::TagAssembler,
};

#[repository(name = "tag", collection = "tags")]
pub struct TagRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl TagRepository {
    /// 범위 필드별 조회 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let scope_index = |field: &str| {
            let mut keys = Document::new();
            keys.insert(field, 1);
            keys.insert("created_at", 1);

            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder()
                    .name(format!("{}_created_at", field))
                    .sparse(true)
                    .build())
                .build()
        };

        self.collection::<Tag>()
            .create_indexes([scope_index("user_id"), scope_index("project_id"), scope_index("task_id")])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl TagAssembler for TagRepository {
    async fn assemble(&self, filter: &TagFilter) -> AppResult<Vec<Tag>> {
        let query = filter.to_document()?;

        self.collection::<Tag>()
            .find(query)
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
