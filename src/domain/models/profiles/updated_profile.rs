//! 프로필 조정 결과

use crate::domain::entities::profiles::UserProfile;

/// 저장된 프로필과, 프로바이더 목록이 제출된 경우 그 목록
///
/// `auths`는 삭제 후 재조회한 결과가 아니라 제출된 목록 그대로입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedProfile {
    pub profile: UserProfile,
    pub auths: Option<Vec<String>>,
}
