//! 프로필 갱신 요청 DTO
//!
//! 모든 필드는 선택 사항입니다. 빈 문자열은 검증을 통과하며 "변경 없음"으로 처리됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError};
use crate::domain::models::profiles::ProfilePatch;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100, message = "이름은 100자 이하여야 합니다"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,

    #[validate(length(max = 128, message = "사진 ID는 128자 이하여야 합니다"))]
    pub photo_id: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub photo_url: Option<String>,

    #[validate(length(max = 100, message = "직함은 100자 이하여야 합니다"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "자기소개는 1000자 이하여야 합니다"))]
    pub bio: Option<String>,

    /// 유지할 인증 프로바이더 전체 목록. 목록에 없는 연결은 삭제됩니다.
    #[validate(custom(function = "validate_providers"))]
    pub auths: Option<Vec<String>>,
}

impl UpdateProfileRequest {
    /// 필드 패치와 프로바이더 목록으로 분리합니다.
    pub fn into_parts(self) -> (ProfilePatch, Option<Vec<String>>) {
        let patch = ProfilePatch {
            name: self.name,
            username: self.username,
            email: self.email,
            photo_id: self.photo_id,
            photo_url: self.photo_url,
            title: self.title,
            bio: self.bio,
        };

        (patch, self.auths)
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Ok(());
    }

    let length = username.chars().count();
    if !(3..=30).contains(&length) {
        return Err(ValidationError::new("invalid_username_length")
            .with_message("사용자명은 3-30자 사이여야 합니다".into()));
    }

    if !username.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '-') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, '_', '.', '-'만 사용 가능합니다".into()));
    }

    Ok(())
}

fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        return Ok(());
    }

    Err(ValidationError::new("invalid_email")
        .with_message("유효한 이메일 주소를 입력해주세요".into()))
}

fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() || url.validate_url() {
        return Ok(());
    }

    Err(ValidationError::new("invalid_url")
        .with_message("유효한 사진 URL을 입력해주세요".into()))
}

fn validate_providers(providers: &[String]) -> Result<(), ValidationError> {
    let invalid = providers
        .iter()
        .any(|provider| provider.trim().is_empty() || provider.len() > 64);

    if invalid {
        return Err(ValidationError::new("invalid_provider")
            .with_message("프로바이더 이름은 1-64자 사이여야 합니다".into()));
    }

    Ok(())
}
