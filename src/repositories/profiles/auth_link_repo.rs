//! # 인증 연결 리포지토리
//!
//! `user_auths` 컬렉션에 대한 [`AuthLinkStore`] 구현입니다.
//! 연결 목록은 자주 바뀌고 조정 직후 재조회되므로 캐싱하지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{registry::Repository, AppError, AppResult},
    db::Database,
    domain::entities::profiles::AuthLink,
    repositories::stores::AuthLinkStore,
};

#[repository(name = "authlink", collection = "user_auths")]
pub struct AuthLinkRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl AuthLinkRepository {
    /// 사용자-프로바이더 쌍 고유 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_provider_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "provider": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_provider_unique".to_string())
                .build())
            .build();

        self.collection::<AuthLink>()
            .create_index(user_provider_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AuthLinkStore for AuthLinkRepository {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<AuthLink>> {
        let user_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 사용자 ID 형식입니다".to_string()))?;

        self.collection::<AuthLink>()
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, link: &AuthLink) -> AppResult<()> {
        let link_id = link.id
            .ok_or_else(|| AppError::ValidationError("식별자가 없는 인증 연결은 삭제할 수 없습니다".to_string()))?;

        let result = self.collection::<AuthLink>()
            .delete_one(doc! { "_id": link_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            log::debug!("이미 삭제된 인증 연결: {} ({})", link_id, link.provider);
        }

        Ok(())
    }
}
