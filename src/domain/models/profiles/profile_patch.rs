//! 프로필 부분 갱신
//!
//! 각 필드는 독립적으로 존재하거나 부재합니다. 값이 `None`이거나 빈 문자열이면
//! 부재로 취급하며 기존 값을 지우지 않습니다.

use crate::domain::entities::profiles::UserProfile;
use crate::utils::string_utils::non_empty;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub photo_id: Option<String>,
    pub photo_url: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
}

fn assign(target: &mut Option<String>, value: &Option<String>) -> bool {
    match non_empty(value) {
        Some(v) => {
            *target = Some(v.to_string());
            true
        }
        None => false,
    }
}

impl ProfilePatch {
    /// 적용할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.username,
            &self.email,
            &self.photo_id,
            &self.photo_url,
            &self.title,
            &self.bio,
        ]
        .into_iter()
        .all(|value| non_empty(value).is_none())
    }

    /// 존재하는 필드만 프로필에 반영하고 반영된 필드 이름을 반환합니다.
    pub fn apply_to(&self, profile: &mut UserProfile) -> Vec<&'static str> {
        let targets: [(&'static str, &mut Option<String>, &Option<String>); 7] = [
            ("name", &mut profile.name, &self.name),
            ("username", &mut profile.username, &self.username),
            ("email", &mut profile.email, &self.email),
            ("photo_id", &mut profile.photo_id, &self.photo_id),
            ("photo_url", &mut profile.photo_url, &self.photo_url),
            ("title", &mut profile.title, &self.title),
            ("bio", &mut profile.bio, &self.bio),
        ];

        targets
            .into_iter()
            .filter_map(|(field, target, value)| assign(target, value).then_some(field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: Some("Bob".to_string()),
            username: Some("bob".to_string()),
            email: Some("bob@example.com".to_string()),
            title: Some("Engineer".to_string()),
            ..UserProfile::new()
        }
    }

    #[test]
    fn test_only_present_fields_are_applied() {
        let mut profile = sample_profile();
        let patch = ProfilePatch {
            name: Some("Alice".to_string()),
            ..ProfilePatch::default()
        };

        let applied = patch.apply_to(&mut profile);

        assert_eq!(applied, vec!["name"]);
        assert_eq!(profile.name.as_deref(), Some("Alice"));
        assert_eq!(profile.username.as_deref(), Some("bob"));
        assert_eq!(profile.email.as_deref(), Some("bob@example.com"));
        assert_eq!(profile.title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_empty_strings_do_not_clear_fields() {
        let mut profile = sample_profile();
        let before = profile.clone();
        let patch = ProfilePatch {
            username: Some(String::new()),
            title: Some(String::new()),
            ..ProfilePatch::default()
        };

        assert!(patch.is_empty());
        assert!(patch.apply_to(&mut profile).is_empty());
        assert_eq!(profile, before);
    }

    #[test]
    fn test_photo_fields_are_independent() {
        let mut profile = sample_profile();
        let patch = ProfilePatch {
            photo_id: Some("file-1".to_string()),
            photo_url: Some("https://cdn.example.com/a.png".to_string()),
            ..ProfilePatch::default()
        };

        let applied = patch.apply_to(&mut profile);

        assert_eq!(applied, vec!["photo_id", "photo_url"]);
        assert_eq!(profile.photo_id.as_deref(), Some("file-1"));
        assert_eq!(profile.photo_url.as_deref(), Some("https://cdn.example.com/a.png"));
    }

    #[test]
    fn test_default_patch_is_empty() {
        assert!(ProfilePatch::default().is_empty());
        assert!(!ProfilePatch { bio: Some("hi".to_string()), ..ProfilePatch::default() }.is_empty());
    }
}
