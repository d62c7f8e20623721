//! 테스트용 메모리 저장소
//!
//! 저장소 트레이트의 메모리 구현으로, 조회/저장/삭제 실패를 주입하고 호출 기록을 남깁니다.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use crate::core::{AppError, AppResult};
use crate::domain::entities::profiles::{AuthLink, EmailRecord, UserProfile};
use crate::domain::entities::tags::Tag;
use crate::domain::models::tags::TagFilter;
use crate::repositories::stores::{AuthLinkStore, EmailStore, ProfileStore, TagAssembler};

fn injected(operation: &str) -> AppError {
    AppError::DatabaseError(format!("injected {} failure", operation))
}

#[derive(Default)]
pub(crate) struct MemoryProfileStore {
    profiles: Mutex<Vec<UserProfile>>,
    /// 고정된 캐시 스냅샷. 있으면 `find_by_id`가 이 값을 반환합니다.
    cached: Mutex<Option<Vec<UserProfile>>>,
    fail_lookups: AtomicBool,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryProfileStore {
    pub(crate) fn with_profiles(profiles: Vec<UserProfile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
            ..Self::default()
        }
    }

    pub(crate) fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// 현재 상태를 캐시로 고정합니다. 이후 저장은 캐시에 반영되지 않습니다.
    pub(crate) fn freeze_cache(&self) {
        let snapshot = self.profiles.lock().unwrap().clone();
        *self.cached.lock().unwrap() = Some(snapshot);
    }

    pub(crate) fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// 저장된 상태를 직접 조회 (실패 주입과 무관)
    pub(crate) fn stored(&self, id: &str) -> Option<UserProfile> {
        self.profiles.lock().unwrap().iter().find(|p| p.is_identified_by(id)).cloned()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserProfile>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(injected("profile lookup"));
        }
        if let Some(cached) = self.cached.lock().unwrap().as_ref() {
            return Ok(cached.iter().find(|p| p.is_identified_by(id)).cloned());
        }
        Ok(self.stored(id))
    }

    async fn find_current(&self, id: &str) -> AppResult<Option<UserProfile>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(injected("profile lookup"));
        }
        Ok(self.stored(id))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserProfile>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(injected("username lookup"));
        }
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.username.as_deref() == Some(username))
            .cloned())
    }

    async fn save(&self, profile: &UserProfile) -> AppResult<UserProfile> {
        self.saves.fetch_add(1, Ordering::SeqCst);

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(AppError::ValidationError("injected save failure".to_string()));
        }

        let mut profiles = self.profiles.lock().unwrap();
        let mut saved = profile.clone();
        saved.touch();

        match profiles.iter_mut().find(|p| p.id == saved.id) {
            Some(existing) => *existing = saved.clone(),
            None => profiles.push(saved.clone()),
        }

        Ok(saved)
    }
}

#[derive(Default)]
pub(crate) struct MemoryAuthLinkStore {
    links: Mutex<Vec<AuthLink>>,
    fail_lookups: AtomicBool,
    failing_providers: Mutex<HashSet<String>>,
    deleted: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MemoryAuthLinkStore {
    pub(crate) fn with_links(links: Vec<AuthLink>) -> Self {
        Self {
            links: Mutex::new(links),
            ..Self::default()
        }
    }

    pub(crate) fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    /// 지정한 프로바이더의 연결 삭제를 실패시킵니다.
    pub(crate) fn fail_delete_of(&self, provider: &str) {
        self.failing_providers.lock().unwrap().insert(provider.to_string());
    }

    /// 삭제된 연결의 프로바이더 (정렬됨)
    pub(crate) fn deleted_providers(&self) -> Vec<String> {
        let mut deleted = self.deleted.lock().unwrap().clone();
        deleted.sort();
        deleted
    }

    /// 동시에 진행 중이던 삭제 수의 최댓값
    pub(crate) fn peak_concurrent_deletes(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// 남아 있는 연결의 프로바이더 (정렬됨)
    pub(crate) fn remaining_providers(&self) -> Vec<String> {
        let mut remaining: Vec<String> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .map(|link| link.provider.clone())
            .collect();
        remaining.sort();
        remaining
    }
}

#[async_trait]
impl AuthLinkStore for MemoryAuthLinkStore {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<AuthLink>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(injected("auth link lookup"));
        }
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|link| link.user_id.to_hex() == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, link: &AuthLink) -> AppResult<()> {
        if self.failing_providers.lock().unwrap().contains(&link.provider) {
            return Err(injected("auth link delete"));
        }

        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(in_flight, Ordering::SeqCst);
        // 다른 삭제가 끼어들 수 있도록 한 번 양보
        actix_web::rt::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.links.lock().unwrap().retain(|existing| existing.id != link.id);
        self.deleted.lock().unwrap().push(link.provider.clone());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MemoryEmailStore {
    emails: Mutex<Vec<EmailRecord>>,
    fail_lookups: AtomicBool,
}

impl MemoryEmailStore {
    pub(crate) fn with_emails(emails: Vec<EmailRecord>) -> Self {
        Self {
            emails: Mutex::new(emails),
            ..Self::default()
        }
    }

    pub(crate) fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmailStore for MemoryEmailStore {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<EmailRecord>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(injected("email lookup"));
        }
        Ok(self
            .emails
            .lock()
            .unwrap()
            .iter()
            .filter(|email| email.user_id.to_hex() == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(crate) struct MemoryTagAssembler {
    tags: Mutex<Vec<Tag>>,
    fail_lookups: AtomicBool,
    filters: Mutex<Vec<TagFilter>>,
}

impl MemoryTagAssembler {
    pub(crate) fn with_tags(tags: Vec<Tag>) -> Self {
        Self {
            tags: Mutex::new(tags),
            ..Self::default()
        }
    }

    pub(crate) fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    /// 전달받은 필터 기록
    pub(crate) fn filters(&self) -> Vec<TagFilter> {
        self.filters.lock().unwrap().clone()
    }
}

#[async_trait]
impl TagAssembler for MemoryTagAssembler {
    async fn assemble(&self, filter: &TagFilter) -> AppResult<Vec<Tag>> {
        self.filters.lock().unwrap().push(filter.clone());

        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(injected("tag assembly"));
        }
        Ok(self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|tag| filter.matches(tag))
            .cloned()
            .collect())
    }
}
