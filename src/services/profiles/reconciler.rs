//! # 프로필 조정
//!
//! 부분 갱신을 적용해 저장한 뒤, 요청에 프로바이더 목록이 있으면 목록에 없는
//! 인증 연결을 삭제합니다.
//!
//! ```text
//! Idle → Applying fields → Saved ─┬─ (목록 없음) ───────────→ Done
//!                                 └─ Syncing providers ─┬──→ Done
//!                                                       └──→ Failed
//! ```
//!
//! 저장은 항상 동기화보다 먼저 완료됩니다. 저장과 삭제는 하나의 트랜잭션이 아니므로
//! 삭제 도중 실패해도 저장된 필드와 이미 삭제된 연결은 되돌리지 않습니다.

use std::collections::HashSet;
use std::sync::Arc;
use futures_util::{stream, TryStreamExt};
use crate::core::{AppError, AppResult, Dependency};
use crate::domain::entities::profiles::{AuthLink, UserProfile};
use crate::domain::models::profiles::{ProfilePatch, UpdatedProfile};
use crate::repositories::stores::{AuthLinkStore, ProfileStore};
use super::aggregator::lookup_failed;

/// 원하는 프로바이더 목록에 없는 연결만 골라냅니다.
pub fn stale_links(links: Vec<AuthLink>, desired: &[String]) -> Vec<AuthLink> {
    let keep: HashSet<&str> = desired.iter().map(String::as_str).collect();

    links
        .into_iter()
        .filter(|link| !keep.contains(link.provider.as_str()))
        .collect()
}

pub struct ProfileReconciler {
    profiles: Arc<dyn ProfileStore>,
    auth_links: Arc<dyn AuthLinkStore>,
    /// 동시에 진행할 삭제 작업 수의 상한
    deletion_concurrency: usize,
}

impl ProfileReconciler {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        auth_links: Arc<dyn AuthLinkStore>,
        deletion_concurrency: usize,
    ) -> Self {
        Self {
            profiles,
            auth_links,
            deletion_concurrency: deletion_concurrency.max(1),
        }
    }

    /// 프로필에 패치를 적용해 저장하고, 필요하면 인증 연결을 동기화합니다.
    ///
    /// # Errors
    ///
    /// - `ValidationError`: 저장 거부 (이후 단계는 실행되지 않음)
    /// - `LookupError(auth_link)`: 기존 연결 조회 실패
    /// - `SyncError(auth_link)`: 연결 삭제 실패 (저장된 필드는 유지됨)
    pub async fn reconcile(
        &self,
        mut profile: UserProfile,
        patch: &ProfilePatch,
        desired_providers: Option<Vec<String>>,
    ) -> AppResult<UpdatedProfile> {
        if patch.is_empty() {
            log::debug!("변경할 필드 없음, 저장만 수행");
        }
        let applied = patch.apply_to(&mut profile);
        log::debug!("프로필 필드 적용: {:?}", applied);

        let saved = self.profiles.save(&profile).await.map_err(|e| {
            log::warn!("프로필 저장 실패: {}", e);
            AppError::ValidationError(format!("사용자 저장 중 오류가 발생했습니다: {}", e))
        })?;
        let user_id = saved
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장된 프로필에 ID가 없습니다".to_string()))?;
        log::debug!("프로필 저장됨: {}", user_id);

        let Some(desired) = desired_providers else {
            log::info!("프로필 갱신 완료: {} (필드 {}개)", user_id, applied.len());
            return Ok(UpdatedProfile {
                profile: saved,
                auths: None,
            });
        };

        let removed = self.sync_providers(&user_id, &desired).await?;
        log::info!(
            "프로필 갱신 완료: {} (필드 {}개, 해제된 프로바이더 {}개)",
            user_id,
            applied.len(),
            removed
        );

        Ok(UpdatedProfile {
            profile: saved,
            auths: Some(desired),
        })
    }

    /// 목록에 없는 연결을 삭제하고 삭제한 개수를 반환합니다.
    ///
    /// 첫 번째 삭제 실패에서 중단합니다. 이미 끝난 삭제는 되돌리지 않습니다.
    async fn sync_providers(&self, user_id: &str, desired: &[String]) -> AppResult<usize> {
        let links = self.auth_links
            .find_by_user_id(user_id)
            .await
            .map_err(|e| lookup_failed(Dependency::AuthLink, e))?;

        let stale = stale_links(links, desired);
        let count = stale.len();
        log::debug!("프로바이더 동기화: {} (삭제 대상 {}개)", user_id, count);

        let store = &self.auth_links;
        stream::iter(stale.into_iter().map(Ok::<AuthLink, AppError>))
            .try_for_each_concurrent(self.deletion_concurrency, |link| async move {
                store.delete(&link).await.map_err(|e| {
                    log::warn!("인증 연결 삭제 실패: {} ({})", link.provider, e);
                    AppError::sync(Dependency::AuthLink, e)
                })?;
                log::debug!("인증 연결 삭제됨: {}", link.provider);
                Ok(())
            })
            .await?;

        Ok(count)
    }
}
