//! # 프로필 서비스
//!
//! 전송 계층과 무관한 프로필 연산의 진입점입니다. 요청자 식별자는 항상
//! `viewer_id` 인자로 명시적으로 전달받습니다.
//!
//! | 연산 | 설명 |
//! |------|------|
//! | [`ProfileService::check_username_taken`] | 다른 사용자가 사용 중인 사용자명인지 확인 |
//! | [`ProfileService::get_self_view`] | 본인 전체 보기 |
//! | [`ProfileService::get_public_view`] | 공개 보기 |
//! | [`ProfileService::update_profile`] | 필드 갱신 및 프로바이더 동기화 |
//! | [`ProfileService::resolve_photo_target`] | 사진 리다이렉트 대상 (실패하지 않음) |
//!
//! 저장소를 트레이트 객체로 보관하므로 `#[service]` 매크로 대신 `main`에서
//! 조립한 뒤 `ServiceLocator::set`으로 등록합니다.

use std::sync::Arc;
use crate::config::SyncConfig;
use crate::core::{AppError, AppResult, Dependency, ServiceLocator};
use crate::domain::dto::profiles::response::{PublicProfileView, SelfProfileView};
use crate::domain::entities::profiles::UserProfile;
use crate::domain::models::profiles::{PhotoTarget, ProfilePatch, UpdatedProfile};
use crate::repositories::profiles::{AuthLinkRepository, EmailRepository, ProfileRepository};
use crate::repositories::stores::{AuthLinkStore, EmailStore, ProfileStore, TagAssembler};
use crate::repositories::tags::TagRepository;
use super::aggregator::{lookup_failed, ProfileAggregator};
use super::reconciler::ProfileReconciler;

pub struct ProfileService {
    profiles: Arc<dyn ProfileStore>,
    aggregator: ProfileAggregator,
    reconciler: ProfileReconciler,
}

impl ProfileService {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        auth_links: Arc<dyn AuthLinkStore>,
        emails: Arc<dyn EmailStore>,
        tags: Arc<dyn TagAssembler>,
        deletion_concurrency: usize,
    ) -> Self {
        Self {
            aggregator: ProfileAggregator::new(profiles.clone(), auth_links.clone(), emails, tags),
            reconciler: ProfileReconciler::new(profiles.clone(), auth_links, deletion_concurrency),
            profiles,
        }
    }

    /// 레지스트리에 등록된 MongoDB 리포지토리로 서비스를 조립합니다.
    pub fn from_registry() -> Self {
        let profiles: Arc<dyn ProfileStore> = ServiceLocator::get::<ProfileRepository>();
        let auth_links: Arc<dyn AuthLinkStore> = ServiceLocator::get::<AuthLinkRepository>();
        let emails: Arc<dyn EmailStore> = ServiceLocator::get::<EmailRepository>();
        let tags: Arc<dyn TagAssembler> = ServiceLocator::get::<TagRepository>();

        Self::new(profiles, auth_links, emails, tags, SyncConfig::deletion_concurrency())
    }

    /// 후보 사용자명을 요청자가 아닌 다른 프로필이 사용 중이면 `true`
    pub async fn check_username_taken(&self, candidate: &str, viewer_id: &str) -> AppResult<bool> {
        let existing = self.profiles
            .find_by_username(candidate)
            .await
            .map_err(|e| lookup_failed(Dependency::Profile, e))?;

        Ok(existing.is_some_and(|profile| !profile.is_identified_by(viewer_id)))
    }

    pub async fn get_self_view(&self, viewer_id: &str) -> AppResult<SelfProfileView> {
        self.aggregator.self_view(viewer_id).await
    }

    pub async fn get_public_view(&self, target_id: &str, viewer_id: Option<&str>) -> AppResult<PublicProfileView> {
        self.aggregator.public_view(target_id, viewer_id).await
    }

    /// 요청자 프로필을 불러와 조정합니다.
    ///
    /// # Errors
    ///
    /// - `NotFound`: 요청자 프로필이 없음
    /// - `LookupError(profile)`: 프로필 조회 실패
    /// - 그 외 [`ProfileReconciler::reconcile`]의 에러
    pub async fn update_profile(
        &self,
        viewer_id: &str,
        patch: ProfilePatch,
        desired_providers: Option<Vec<String>>,
    ) -> AppResult<UpdatedProfile> {
        let profile = self.load_viewer(viewer_id).await?;

        self.reconciler.reconcile(profile, &patch, desired_providers).await
    }

    /// 사진 리다이렉트 대상을 결정합니다.
    ///
    /// 대상이 없거나 조회에 실패하면 기본 이미지로 대체합니다.
    pub async fn resolve_photo_target(&self, target_id: &str) -> PhotoTarget {
        match self.profiles.find_by_id(target_id).await {
            Ok(Some(profile)) => PhotoTarget::for_profile(&profile),
            Ok(None) => {
                log::debug!("사진 대상 없음, 기본 이미지 사용: {}", target_id);
                PhotoTarget::DefaultPlaceholder
            }
            Err(e) => {
                log::warn!("사진 대상 조회 실패, 기본 이미지 사용: {} ({})", target_id, e);
                PhotoTarget::DefaultPlaceholder
            }
        }
    }

    /// 갱신 대상은 캐시가 아닌 현재 상태에서 불러옵니다.
    async fn load_viewer(&self, viewer_id: &str) -> AppResult<UserProfile> {
        self.profiles
            .find_current(viewer_id)
            .await
            .map_err(|e| lookup_failed(Dependency::Profile, e))?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use crate::repositories::memory::{
        MemoryAuthLinkStore, MemoryEmailStore, MemoryProfileStore, MemoryTagAssembler,
    };

    fn service_with(profiles: Vec<UserProfile>) -> (ProfileService, Arc<MemoryProfileStore>) {
        let store = Arc::new(MemoryProfileStore::with_profiles(profiles));
        let service = ProfileService::new(
            store.clone(),
            Arc::new(MemoryAuthLinkStore::default()),
            Arc::new(MemoryEmailStore::default()),
            Arc::new(MemoryTagAssembler::default()),
            4,
        );
        (service, store)
    }

    fn named(id: ObjectId, username: &str) -> UserProfile {
        UserProfile {
            username: Some(username.to_string()),
            ..UserProfile::with_id(id)
        }
    }

    #[actix_web::test]
    async fn test_username_owned_by_viewer_is_free() {
        let viewer = ObjectId::new();
        let (service, _) = service_with(vec![named(viewer, "bob")]);

        assert!(!service.check_username_taken("bob", &viewer.to_hex()).await.unwrap());
    }

    #[actix_web::test]
    async fn test_username_owned_by_viewer_ignores_hex_case() {
        let viewer = ObjectId::new();
        let (service, _) = service_with(vec![named(viewer, "bob")]);

        let taken = service
            .check_username_taken("bob", &viewer.to_hex().to_uppercase())
            .await
            .unwrap();

        assert!(!taken);
    }

    #[actix_web::test]
    async fn test_username_owned_by_other_is_taken() {
        let owner = ObjectId::new();
        let viewer = ObjectId::new();
        let (service, _) = service_with(vec![named(owner, "bob")]);

        assert!(service.check_username_taken("bob", &viewer.to_hex()).await.unwrap());
        assert!(!service.check_username_taken("carol", &viewer.to_hex()).await.unwrap());
    }

    #[actix_web::test]
    async fn test_username_lookup_failure() {
        let (service, store) = service_with(vec![]);
        store.fail_lookups();

        let error = service.check_username_taken("bob", "viewer").await.unwrap_err();

        assert_eq!(error.dependency(), Some(Dependency::Profile));
    }

    #[actix_web::test]
    async fn test_update_unknown_viewer_is_not_found() {
        let (service, store) = service_with(vec![]);

        let result = service
            .update_profile(&ObjectId::new().to_hex(), ProfilePatch::default(), None)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.save_count(), 0);
    }

    #[actix_web::test]
    async fn test_update_reads_current_state_not_cache() {
        let viewer = ObjectId::new();
        let (service, store) = service_with(vec![UserProfile::with_id(viewer)]);
        store.freeze_cache();

        let concurrent = UserProfile {
            title: Some("CTO".to_string()),
            ..UserProfile::with_id(viewer)
        };
        store.save(&concurrent).await.unwrap();

        let patch = ProfilePatch {
            bio: Some("hello".to_string()),
            ..ProfilePatch::default()
        };
        service.update_profile(&viewer.to_hex(), patch, None).await.unwrap();

        let stored = store.stored(&viewer.to_hex()).unwrap();
        assert_eq!(stored.title.as_deref(), Some("CTO"));
        assert_eq!(stored.bio.as_deref(), Some("hello"));
    }

    #[actix_web::test]
    async fn test_photo_resolution_order() {
        let with_file = ObjectId::new();
        let with_url = ObjectId::new();
        let bare = ObjectId::new();
        let (service, _) = service_with(vec![
            UserProfile {
                photo_id: Some("file-1".to_string()),
                photo_url: Some("https://cdn.example.com/x.png".to_string()),
                ..UserProfile::with_id(with_file)
            },
            UserProfile {
                photo_url: Some("https://cdn.example.com/y.png".to_string()),
                ..UserProfile::with_id(with_url)
            },
            UserProfile::with_id(bare),
        ]);

        assert_eq!(
            service.resolve_photo_target(&with_file.to_hex()).await,
            PhotoTarget::InternalFile("file-1".to_string())
        );
        assert_eq!(
            service.resolve_photo_target(&with_url.to_hex()).await,
            PhotoTarget::ExternalUrl("https://cdn.example.com/y.png".to_string())
        );
        assert_eq!(service.resolve_photo_target(&bare.to_hex()).await, PhotoTarget::DefaultPlaceholder);
        assert_eq!(
            service.resolve_photo_target(&ObjectId::new().to_hex()).await,
            PhotoTarget::DefaultPlaceholder
        );
    }

    #[actix_web::test]
    async fn test_photo_resolution_never_fails() {
        let (service, store) = service_with(vec![]);
        store.fail_lookups();

        assert_eq!(service.resolve_photo_target("anything").await, PhotoTarget::DefaultPlaceholder);
    }
}
