//! 프로필 도메인 서비스
//!
//! - [`aggregator`] - 읽기 집계 (본인 보기, 공개 보기)
//! - [`reconciler`] - 쓰기 조정 (필드 저장 후 프로바이더 동기화)
//! - [`tag_sanitizer`] - 태그 내부 필드 제거
//! - [`profile_service`] - 위 구성요소를 묶는 연산 진입점

pub mod aggregator;
pub mod reconciler;
pub mod tag_sanitizer;
pub mod profile_service;

pub use aggregator::ProfileAggregator;
pub use reconciler::ProfileReconciler;
pub use profile_service::ProfileService;
