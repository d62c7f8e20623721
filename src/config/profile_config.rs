//! 프로필 도메인 설정
//!
//! 사진 리다이렉트 경로와 인증 연결 정리 동시성을 관리합니다.

use std::env;

/// 기본 내부 파일 경로 접두사
pub const DEFAULT_FILE_PREFIX: &str = "/api/file/get/";

/// 기본 프로필 이미지 경로
pub const DEFAULT_PLACEHOLDER: &str = "/images/default-user-icon-profile.png";

/// 프로필 사진 리다이렉트 설정
pub struct PhotoConfig;

impl PhotoConfig {
    /// 내부 파일 서비스 경로 접두사 (`PHOTO_FILE_PREFIX`)
    ///
    /// 파일 ID가 그대로 뒤에 붙으므로 `/`로 끝나도록 보정합니다.
    pub fn file_prefix() -> String {
        let prefix = env::var("PHOTO_FILE_PREFIX").unwrap_or_else(|_| DEFAULT_FILE_PREFIX.to_string());
        if prefix.ends_with('/') {
            prefix
        } else {
            format!("{}/", prefix)
        }
    }

    /// 사진이 없거나 조회에 실패했을 때 사용할 이미지 경로 (`PHOTO_PLACEHOLDER`)
    pub fn placeholder() -> String {
        env::var("PHOTO_PLACEHOLDER").unwrap_or_else(|_| DEFAULT_PLACEHOLDER.to_string())
    }
}

/// 인증 연결 동기화 설정
pub struct SyncConfig;

impl SyncConfig {
    /// 동시에 진행할 수 있는 인증 연결 삭제 작업의 최대 수
    ///
    /// `AUTH_SYNC_CONCURRENCY` 값을 1..=32 범위로 제한합니다. 기본값: 4
    pub fn deletion_concurrency() -> usize {
        Self::clamp_concurrency(env::var("AUTH_SYNC_CONCURRENCY").ok().as_deref())
    }

    fn clamp_concurrency(raw: Option<&str>) -> usize {
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .map(|limit| limit.clamp(1, 32))
            .unwrap_or(4)
    }
}
