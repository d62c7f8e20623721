//! # Repository Layer
//!
//! MongoDB 컬렉션 접근을 담당합니다. 모든 리포지토리는 `#[repository]` 매크로로
//! 싱글톤 등록되며 `Arc<Database>`, `Arc<RedisClient>`를 주입받습니다.
//!
//! ```text
//! repositories/
//! ├── stores.rs           - 협력 저장소 트레이트
//! ├── profiles/
//! │   ├── profile_repo    - users (Redis 캐시)
//! │   ├── auth_link_repo  - user_auths
//! │   └── email_repo      - user_emails
//! └── tags/
//!     └── tag_repo        - tags
//! ```

pub mod stores;
pub mod profiles;
pub mod tags;

#[cfg(test)]
pub(crate) mod memory;

pub use stores::{AuthLinkStore, EmailStore, ProfileStore, TagAssembler};
