//! # Service Layer
//!
//! 비즈니스 로직을 담당합니다.
//!
//! - [`profiles`] - 프로필 집계/조정과 연산 진입점 (`ProfileService`)
//! - [`auth`] - JWT 검증 (`TokenService`, `#[service]` 싱글톤)
//!
//! ```rust,ignore
//! let service = ServiceLocator::get::<ProfileService>();
//! let view = service.get_self_view(&user.user_id).await?;
//! ```

pub mod profiles;
pub mod auth;
