//! # 협력 저장소 인터페이스
//!
//! 프로필 서비스의 핵심 로직(집계, 조정)이 의존하는 네 개의 외부 저장소 계약입니다.
//! 운영 환경에서는 MongoDB 리포지토리가, 테스트에서는 메모리 구현이 주입됩니다.
//!
//! | 트레이트 | 운영 구현 | 연산 |
//! |----------|-----------|------|
//! | [`ProfileStore`] | `ProfileRepository` | ID 조회 (캐시/원본), 사용자명 조회, 저장 |
//! | [`AuthLinkStore`] | `AuthLinkRepository` | 사용자별 조회, 삭제 |
//! | [`EmailStore`] | `EmailRepository` | 사용자별 조회 |
//! | [`TagAssembler`] | `TagRepository` | 범위 필터로 태그 조립 |
//!
//! 각 호출은 독립적으로 일관되며 저장소 간 트랜잭션은 없습니다.

use async_trait::async_trait;
use crate::core::AppResult;
use crate::domain::entities::profiles::{AuthLink, EmailRecord, UserProfile};
use crate::domain::entities::tags::Tag;
use crate::domain::models::tags::TagFilter;

/// 사용자 프로필 저장소
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// ID로 프로필을 조회합니다. 없으면 `None`입니다. 캐시된 값일 수 있습니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserProfile>>;

    /// 캐시를 거치지 않고 저장소의 현재 상태를 조회합니다.
    ///
    /// 조회 결과를 수정해 다시 저장하는 경로는 이 메서드를 사용해야 합니다.
    async fn find_current(&self, id: &str) -> AppResult<Option<UserProfile>>;

    /// 사용자명으로 프로필을 조회합니다.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserProfile>>;

    /// 프로필을 검증 후 저장하고 저장된 상태를 반환합니다.
    ///
    /// 식별자가 없거나 사용자명이 다른 프로필과 겹치면 거부합니다.
    async fn save(&self, profile: &UserProfile) -> AppResult<UserProfile>;
}

/// 인증 프로바이더 연결 저장소
#[async_trait]
pub trait AuthLinkStore: Send + Sync {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<AuthLink>>;

    /// 연결 하나를 삭제합니다. 이미 없는 연결이면 성공으로 처리합니다.
    async fn delete(&self, link: &AuthLink) -> AppResult<()>;
}

/// 등록 이메일 저장소
#[async_trait]
pub trait EmailStore: Send + Sync {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<EmailRecord>>;
}

/// 태그 조립기
#[async_trait]
pub trait TagAssembler: Send + Sync {
    /// 필터 범위의 삭제되지 않은 태그를 생성 순으로 반환합니다.
    async fn assemble(&self, filter: &TagFilter) -> AppResult<Vec<Tag>>;
}
