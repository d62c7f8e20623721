//! 문자열 처리 유틸리티

/// 값이 있고 비어 있지 않을 때만 문자열을 반환합니다.
///
/// 프로필 패치와 사진 위치 결정에서 "존재"를 판정하는 공통 규칙입니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(non_empty(&Some("bob".to_string())), Some("bob"));
/// assert_eq!(non_empty(&Some(String::new())), None);
/// assert_eq!(non_empty(&None), None);
/// ```
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
