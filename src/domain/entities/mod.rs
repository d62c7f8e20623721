//! 도메인 엔티티
//!
//! MongoDB 컬렉션에 저장되는 영속 객체들입니다.
//!
//! | 엔티티 | 컬렉션 | 소유 |
//! |--------|--------|------|
//! | [`profiles::UserProfile`] | `users` | 프로필 저장소 |
//! | [`profiles::AuthLink`] | `user_auths` | 인증 연결 저장소 |
//! | [`profiles::EmailRecord`] | `user_emails` | 이메일 저장소 |
//! | [`tags::Tag`] | `tags` | 태그 조립기 |

pub mod profiles;
pub mod tags;
