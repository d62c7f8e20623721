//! 프로필 응답 DTO
//!
//! 응답 전용 투영이며 저장되지 않습니다. `likeCount`는 항상 0입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::profiles::{EmailRecord, UserProfile};
use crate::domain::models::profiles::UpdatedProfile;
use crate::utils::time_utils::to_utc;
use super::tag_response::TagView;

/// 좋아요 수 (집계 기능이 없어 고정값)
pub const LIKE_COUNT_PLACEHOLDER: u32 = 0;

/// 임의 대상 프로필의 공개 보기
///
/// 인증 프로바이더와 이메일은 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileView {
    pub id: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub photo_id: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub like_count: u32,
    /// 요청자 본인의 프로필인지 여부
    pub is_owner: bool,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<TagView>,
}

impl PublicProfileView {
    pub fn new(profile: UserProfile, is_owner: bool, tags: Vec<TagView>) -> Self {
        Self {
            id: profile.id_string().unwrap_or_default(),
            name: profile.name,
            username: profile.username,
            photo_id: profile.photo_id,
            title: profile.title,
            bio: profile.bio,
            like_count: LIKE_COUNT_PLACEHOLDER,
            is_owner,
            created_at: to_utc(profile.created_at),
            tags,
        }
    }
}

/// 등록 이메일 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailResponse {
    pub id: String,
    pub address: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<EmailRecord> for EmailResponse {
    fn from(record: EmailRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            address: record.address,
            verified: record.verified,
            created_at: to_utc(record.created_at),
        }
    }
}

/// 요청자 본인의 전체 프로필 보기
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelfProfileView {
    pub id: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub photo_id: Option<String>,
    pub photo_url: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 연결된 인증 프로바이더 이름
    pub auths: Vec<String>,
    pub emails: Vec<EmailResponse>,
    pub tags: Vec<TagView>,
    pub is_owner: bool,
    pub like_count: u32,
}

impl SelfProfileView {
    pub fn new(
        profile: UserProfile,
        auths: Vec<String>,
        emails: Vec<EmailResponse>,
        tags: Vec<TagView>,
    ) -> Self {
        Self {
            id: profile.id_string().unwrap_or_default(),
            name: profile.name,
            username: profile.username,
            email: profile.email,
            photo_id: profile.photo_id,
            photo_url: profile.photo_url,
            title: profile.title,
            bio: profile.bio,
            created_at: to_utc(profile.created_at),
            updated_at: to_utc(profile.updated_at),
            auths,
            emails,
            tags,
            is_owner: true,
            like_count: LIKE_COUNT_PLACEHOLDER,
        }
    }
}

/// 프로필 갱신 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProfileResponse {
    pub id: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub photo_id: Option<String>,
    pub photo_url: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auths: Option<Vec<String>>,
}

impl From<UpdatedProfile> for UpdatedProfileResponse {
    fn from(updated: UpdatedProfile) -> Self {
        let UpdatedProfile { profile, auths } = updated;

        Self {
            id: profile.id_string().unwrap_or_default(),
            name: profile.name,
            username: profile.username,
            email: profile.email,
            photo_id: profile.photo_id,
            photo_url: profile.photo_url,
            title: profile.title,
            bio: profile.bio,
            created_at: to_utc(profile.created_at),
            updated_at: to_utc(profile.updated_at),
            auths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_public_view_serializes_camel_case_without_private_fields() {
        let profile = UserProfile {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            photo_url: Some("https://cdn.example.com/a.png".to_string()),
            ..UserProfile::with_id(ObjectId::new())
        };

        let json = serde_json::to_value(PublicProfileView::new(profile, false, vec![])).unwrap();

        assert_eq!(json["likeCount"], 0);
        assert_eq!(json["isOwner"], false);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("email").is_none());
        assert!(json.get("photoUrl").is_none());
        assert!(json.get("auths").is_none());
        assert!(json.get("emails").is_none());
    }

    #[test]
    fn test_updated_response_omits_auths_when_not_synced() {
        let profile = UserProfile::with_id(ObjectId::new());

        let without = serde_json::to_value(UpdatedProfileResponse::from(UpdatedProfile {
            profile: profile.clone(),
            auths: None,
        }))
        .unwrap();
        let with = serde_json::to_value(UpdatedProfileResponse::from(UpdatedProfile {
            profile,
            auths: Some(vec!["google".to_string()]),
        }))
        .unwrap();

        assert!(without.get("auths").is_none());
        assert_eq!(with["auths"], serde_json::json!(["google"]));
    }
}
