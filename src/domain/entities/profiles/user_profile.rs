//! 사용자 프로필 엔티티
//!
//! `users` 컬렉션 문서와 1:1로 매핑됩니다. 프로필은 이 서비스에서 삭제되지 않으며
//! 변경은 프로필 조정 서비스를 통해서만 이루어집니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 프로필
///
/// 편집 가능한 필드는 모두 선택 값입니다. `username`은 전체 프로필에서 고유해야 하며
/// `email`은 이메일 저장소와 별개인 표시용 연락처입니다.
/// `photo_id`와 `photo_url`은 동시에 존재할 수 있으며 사진 위치 결정 시 `photo_id`가 우선합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 고유 사용자명
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// 연락처 이메일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 내부 파일 서비스의 사진 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<String>,
    /// 외부 사진 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// 직함
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 자기소개
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// 생성 시간 (없으면 epoch)
    #[serde(default = "crate::utils::time_utils::missing_timestamp")]
    pub created_at: DateTime,
    /// 수정 시간 (없으면 epoch)
    #[serde(default = "crate::utils::time_utils::missing_timestamp")]
    pub updated_at: DateTime,
}

impl UserProfile {
    /// 빈 프로필을 생성합니다. 식별자는 저장 시 부여됩니다.
    pub fn new() -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name: None,
            username: None,
            email: None,
            photo_id: None,
            photo_url: None,
            title: None,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 지정된 식별자로 프로필을 생성합니다.
    pub fn with_id(id: ObjectId) -> Self {
        Self {
            id: Some(id),
            ..Self::new()
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 식별자 문자열이 이 프로필을 가리키는지 확인합니다.
    ///
    /// ObjectId로 해석해 비교하므로 16진수 대소문자는 구분하지 않습니다.
    pub fn is_identified_by(&self, id: &str) -> bool {
        match (self.id, ObjectId::parse_str(id)) {
            (Some(own), Ok(other)) => own == other,
            _ => false,
        }
    }

    /// 수정 시간을 현재 시각으로 갱신
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}
