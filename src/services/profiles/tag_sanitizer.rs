//! 태그 정제
//!
//! 조립된 태그에서 내부 연결 필드(`userId`, `projectId`, `taskId`)와
//! `updatedAt`, `deletedAt`을 제거합니다. 순서와 나머지 필드는 그대로 유지됩니다.

use crate::domain::dto::profiles::response::TagView;
use crate::domain::entities::tags::Tag;

pub fn sanitize_tags(tags: Vec<Tag>) -> Vec<TagView> {
    tags.into_iter().map(TagView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::profiles::response::tag_response::STRIPPED_TAG_KEYS;
    use mongodb::bson::{doc, oid::ObjectId, DateTime};

    fn tag_with_everything(value: &str) -> Tag {
        Tag {
            project_id: Some(ObjectId::new()),
            task_id: Some(ObjectId::new()),
            deleted_at: Some(DateTime::now()),
            extra: doc! {
                "color": "#ff0000",
                "userId": "leaked",
                "projectId": "leaked",
                "updatedAt": "leaked",
            },
            ..Tag::for_user(ObjectId::new(), value)
        }
    }

    #[test]
    fn test_internal_fields_never_leak() {
        let sanitized = sanitize_tags(vec![tag_with_everything("rust")]);
        let json = serde_json::to_value(&sanitized).unwrap();
        let object = json[0].as_object().unwrap();

        for key in STRIPPED_TAG_KEYS {
            assert!(!object.contains_key(key), "{} leaked", key);
        }
        assert_eq!(object["value"], "rust");
        assert_eq!(object["color"], "#ff0000");
        assert!(object.contains_key("id"));
        assert!(object.contains_key("createdAt"));
    }

    #[test]
    fn test_order_is_preserved() {
        let sanitized = sanitize_tags(vec![
            tag_with_everything("b"),
            tag_with_everything("a"),
            tag_with_everything("c"),
        ]);

        let values: Vec<&str> = sanitized.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sanitize_tags(Vec::new()).is_empty());
    }
}
