//! # 이메일 리포지토리 (`user_emails`)

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{registry::Repository, AppError, AppResult},
    db::Database,
    domain::entities::profiles::EmailRecord,
    repositories::stores::EmailStore,
};

#[repository(name = "email", collection = "user_emails")]
pub struct EmailRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl EmailRepository {
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection::<EmailRecord>()
            .create_index(user_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl EmailStore for EmailRepository {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<EmailRecord>> {
        let user_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 사용자 ID 형식입니다".to_string()))?;

        self.collection::<EmailRecord>()
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
