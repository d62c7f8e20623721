//! 사용자 프로필 서비스
//!
//! 사용자 프로필과 그 주변 데이터(인증 프로바이더 연결, 등록 이메일, 태그)를
//! 읽기 전용 보기로 집계하고, 프로필 갱신과 인증 연결 정리를 조정하는 서비스입니다.
//!
//! # Features
//!
//! - **본인 보기 / 공개 보기**: 요청자와 대상이 같은지에 따라 `isOwner` 결정
//! - **프로필 갱신**: 비어 있지 않은 필드만 반영, 요청한 프로바이더 목록에 없는 연결 삭제
//! - **사진 리다이렉트**: 내부 파일, 외부 URL, 기본 이미지 순으로 결정
//! - **JWT 검증**: 외부 인증 서비스가 발급한 HS256 토큰
//! - **싱글톤 DI**: 매크로 기반 리포지토리 등록
//! - **MongoDB + Redis**: 저장 및 프로필 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 입력 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ProfileService  │ ← Aggregator (읽기) / Reconciler (쓰기)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Store traits   │ ← ProfileStore, AuthLinkStore, EmailStore, TagAssembler
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_profile_service::core::ServiceLocator;
//! use user_profile_service::services::profiles::ProfileService;
//!
//! let service = ServiceLocator::get::<ProfileService>();
//! let view = service.get_public_view(&target_id, Some(&viewer_id)).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
