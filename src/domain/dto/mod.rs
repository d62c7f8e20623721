//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문 구조체입니다. JSON 키는 camelCase를 사용합니다.
//!
//! ```text
//! dto/
//! └── profiles/
//!     ├── request/   - UpdateProfileRequest (validator 검증)
//!     └── response/  - PublicProfileView, SelfProfileView, UpdatedProfileResponse, TagView
//! ```

pub mod profiles;
