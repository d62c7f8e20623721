//! # Core Framework Module
//!
//! 프로필 서비스 전반에서 공유하는 프레임워크 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입별 싱글톤 인스턴스 관리
//! - **자동 레지스트리**: `inventory` 기반 `#[service]` / `#[repository]` 수집
//! - **수동 등록**: 트레이트 객체로 조립되는 컴포넌트는 `ServiceLocator::set`
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **Dependency**: 조회/동기화 실패 의존성 식별
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::{AppError, AppResult, ServiceLocator};
//! use crate::services::profiles::ProfileService;
//!
//! async fn load_self_view(viewer_id: &str) -> AppResult<SelfProfileView> {
//!     let service = ServiceLocator::get::<ProfileService>();
//!     service.get_self_view(viewer_id).await
//! }
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
