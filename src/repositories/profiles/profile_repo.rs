//! # 프로필 리포지토리
//!
//! `users` 컬렉션에 대한 [`ProfileStore`] 구현입니다. `find_by_id`는 Redis read-through 캐시를
//! 거치고 `find_current`는 항상 MongoDB에서 읽습니다. 저장 시 해당 캐시 항목을 무효화합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::{registry::Repository, AppError, AppResult},
    db::Database,
    domain::entities::profiles::UserProfile,
    repositories::stores::ProfileStore,
    utils::string_utils::non_empty,
};

const DUPLICATE_KEY_CODE: i32 = 11000;

fn parse_profile_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[repository(name = "profile", collection = "users")]
pub struct ProfileRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl ProfileRepository {
    /// `username`(고유, sparse)과 `created_at`(내림차순) 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<UserProfile>();

        // 사용자명이 없는 프로필은 여러 개 존재할 수 있음
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, object_id: ObjectId) -> AppResult<Option<UserProfile>> {
        self.collection::<UserProfile>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 다른 프로필이 같은 사용자명을 사용 중인지 확인합니다.
    async fn username_claimed_by_other(&self, username: &str, owner: ObjectId) -> AppResult<bool> {
        let existing = self.collection::<UserProfile>()
            .find_one(doc! { "username": username, "_id": { "$ne": owner } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(existing.is_some())
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserProfile>> {
        let object_id = parse_profile_id(id)?;
        let cache_key = self.cache_key(&object_id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<UserProfile>(&cache_key).await {
            return Ok(Some(cached));
        }

        let profile = self.load(object_id).await?;

        if let Some(ref profile) = profile {
            let _ = self.redis
                .set_with_expiry(&cache_key, profile, CacheConfig::profile_ttl_seconds())
                .await;
        }

        Ok(profile)
    }

    async fn find_current(&self, id: &str) -> AppResult<Option<UserProfile>> {
        self.load(parse_profile_id(id)?).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserProfile>> {
        self.collection::<UserProfile>()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, profile: &UserProfile) -> AppResult<UserProfile> {
        let object_id = profile.id
            .ok_or_else(|| AppError::ValidationError("식별자가 없는 프로필은 저장할 수 없습니다".to_string()))?;

        if let Some(username) = non_empty(&profile.username) {
            if self.username_claimed_by_other(username, object_id).await? {
                return Err(AppError::ValidationError("이미 사용 중인 사용자명입니다".to_string()));
            }
        }

        let mut saved = profile.clone();
        saved.touch();

        let result = self.collection::<UserProfile>()
            .replace_one(doc! { "_id": object_id }, &saved)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ValidationError("이미 사용 중인 사용자명입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("저장할 프로필이 존재하지 않습니다".to_string()));
        }

        let cache_key = self.cache_key(&object_id.to_hex());
        if let Err(e) = self.redis.del(&cache_key).await {
            log::warn!("프로필 캐시 무효화 실패: {} ({})", cache_key, e);
        }
        log::debug!("프로필 저장 완료: {}", object_id);

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_id() {
        let id = ObjectId::new();

        assert_eq!(parse_profile_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(parse_profile_id("42"), Err(AppError::ValidationError(_))));
    }
}
