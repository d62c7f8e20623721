//! 도메인 모델
//!
//! 영속되지 않는 값 객체들입니다.
//!
//! - [`auth`] - 인증된 요청자 정보와 인증 모드
//! - [`token`] - JWT 클레임
//! - [`profiles`] - 프로필 패치, 사진 위치, 갱신 결과
//! - [`tags`] - 태그 조회 범위

pub mod auth;
pub mod token;
pub mod profiles;
pub mod tags;
