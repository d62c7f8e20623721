//! # 프로필 집계
//!
//! 기본 프로필에 인증 프로바이더, 이메일, 정제된 태그를 합쳐 응답용 보기를 만듭니다.
//! 저장 상태를 변경하지 않으며, 어느 의존성이든 실패하면 부분 결과 없이 에러를 반환합니다.
//!
//! ## 조회 순서 (본인 보기)
//!
//! ```text
//! profile ──▶ ┬─ auth links ─┐
//!             └─ emails ─────┴─▶ tags ──▶ SelfProfileView
//! ```

use std::sync::Arc;
use futures_util::future::try_join;
use crate::core::{AppError, AppResult, Dependency};
use crate::domain::dto::profiles::response::{
    EmailResponse, PublicProfileView, SelfProfileView, TagView,
};
use crate::domain::entities::profiles::UserProfile;
use crate::domain::models::tags::TagFilter;
use crate::repositories::stores::{AuthLinkStore, EmailStore, ProfileStore, TagAssembler};
use super::tag_sanitizer::sanitize_tags;

/// 의존성 실패를 기록하고 조회 에러로 변환합니다.
pub(crate) fn lookup_failed(dependency: Dependency, error: AppError) -> AppError {
    log::warn!("{} 조회 실패: {}", dependency, error);
    AppError::lookup(dependency, error)
}

pub struct ProfileAggregator {
    profiles: Arc<dyn ProfileStore>,
    auth_links: Arc<dyn AuthLinkStore>,
    emails: Arc<dyn EmailStore>,
    tags: Arc<dyn TagAssembler>,
}

impl ProfileAggregator {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        auth_links: Arc<dyn AuthLinkStore>,
        emails: Arc<dyn EmailStore>,
        tags: Arc<dyn TagAssembler>,
    ) -> Self {
        Self {
            profiles,
            auth_links,
            emails,
            tags,
        }
    }

    /// 요청자 본인의 전체 프로필 보기
    ///
    /// # Errors
    ///
    /// - `NotFound`: 요청자 프로필이 없음
    /// - `LookupError`: 프로필, 인증 연결, 이메일, 태그 중 하나의 조회 실패
    pub async fn self_view(&self, viewer_id: &str) -> AppResult<SelfProfileView> {
        let profile = self.load_profile(viewer_id).await?;

        let (links, emails) = try_join(
            async {
                self.auth_links
                    .find_by_user_id(viewer_id)
                    .await
                    .map_err(|e| lookup_failed(Dependency::AuthLink, e))
            },
            async {
                self.emails
                    .find_by_user_id(viewer_id)
                    .await
                    .map_err(|e| lookup_failed(Dependency::Email, e))
            },
        )
        .await?;

        let tags = self.assemble_tags(viewer_id).await?;

        let auths = links.into_iter().map(|link| link.provider).collect();
        let emails = emails.into_iter().map(EmailResponse::from).collect();

        Ok(SelfProfileView::new(profile, auths, emails, tags))
    }

    /// 임의 대상의 공개 프로필 보기
    ///
    /// `is_owner`는 요청자 ID가 대상 프로필 ID와 같을 때만 참입니다.
    pub async fn public_view(&self, target_id: &str, viewer_id: Option<&str>) -> AppResult<PublicProfileView> {
        let profile = self.load_profile(target_id).await?;
        let is_owner = viewer_id.is_some_and(|viewer| profile.is_identified_by(viewer));

        let tags = self.assemble_tags(target_id).await?;

        Ok(PublicProfileView::new(profile, is_owner, tags))
    }

    async fn load_profile(&self, id: &str) -> AppResult<UserProfile> {
        self.profiles
            .find_by_id(id)
            .await
            .map_err(|e| lookup_failed(Dependency::Profile, e))?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    async fn assemble_tags(&self, user_id: &str) -> AppResult<Vec<TagView>> {
        let tags = self.tags
            .assemble(&TagFilter::for_user(user_id))
            .await
            .map_err(|e| lookup_failed(Dependency::Tag, e))?;

        Ok(sanitize_tags(tags))
    }
}
