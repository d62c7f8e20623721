//! 프로필 사진 리다이렉트 대상

use crate::config::PhotoConfig;
use crate::domain::entities::profiles::UserProfile;
use crate::utils::string_utils::non_empty;

/// 사진 위치 결정 결과
///
/// 우선순위: 내부 파일 ID → 외부 URL → 기본 이미지
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoTarget {
    /// 내부 파일 서비스의 파일 ID
    InternalFile(String),
    /// 외부 이미지 URL
    ExternalUrl(String),
    /// 기본 프로필 이미지
    DefaultPlaceholder,
}

impl PhotoTarget {
    pub fn for_profile(profile: &UserProfile) -> Self {
        if let Some(photo_id) = non_empty(&profile.photo_id) {
            PhotoTarget::InternalFile(photo_id.to_string())
        } else if let Some(photo_url) = non_empty(&profile.photo_url) {
            PhotoTarget::ExternalUrl(photo_url.to_string())
        } else {
            PhotoTarget::DefaultPlaceholder
        }
    }

    /// 설정된 경로로 리다이렉트 위치를 만듭니다.
    pub fn location(&self) -> String {
        self.location_with(&PhotoConfig::file_prefix(), &PhotoConfig::placeholder())
    }

    pub fn location_with(&self, file_prefix: &str, placeholder: &str) -> String {
        match self {
            PhotoTarget::InternalFile(id) => format!("{}{}", file_prefix, id),
            PhotoTarget::ExternalUrl(url) => url.clone(),
            PhotoTarget::DefaultPlaceholder => placeholder.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_id_takes_precedence() {
        let profile = UserProfile {
            photo_id: Some("abc".to_string()),
            photo_url: Some("https://cdn.example.com/me.png".to_string()),
            ..UserProfile::new()
        };

        assert_eq!(PhotoTarget::for_profile(&profile), PhotoTarget::InternalFile("abc".to_string()));
    }

    #[test]
    fn test_falls_back_to_url_then_placeholder() {
        let with_url = UserProfile {
            photo_id: Some(String::new()),
            photo_url: Some("https://cdn.example.com/me.png".to_string()),
            ..UserProfile::new()
        };

        assert_eq!(
            PhotoTarget::for_profile(&with_url),
            PhotoTarget::ExternalUrl("https://cdn.example.com/me.png".to_string())
        );
        assert_eq!(PhotoTarget::for_profile(&UserProfile::new()), PhotoTarget::DefaultPlaceholder);
    }

    #[test]
    fn test_location_rendering() {
        let prefix = "/api/file/get/";
        let placeholder = "/images/default-user-icon-profile.png";

        assert_eq!(PhotoTarget::InternalFile("42".to_string()).location_with(prefix, placeholder), "/api/file/get/42");
        assert_eq!(
            PhotoTarget::ExternalUrl("https://x.io/p.png".to_string()).location_with(prefix, placeholder),
            "https://x.io/p.png"
        );
        assert_eq!(PhotoTarget::DefaultPlaceholder.location_with(prefix, placeholder), placeholder);
    }
}
