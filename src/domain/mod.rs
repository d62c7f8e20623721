//! # Domain Layer Module
//!
//! ```text
//! domain
//! ├── entities  - MongoDB에 저장되는 영속 객체 (UserProfile, AuthLink, EmailRecord, Tag)
//! ├── models    - 영속되지 않는 값 객체 (ProfilePatch, PhotoTarget, TagFilter, 인증 정보)
//! └── dto       - HTTP 요청/응답 본문
//! ```
//!
//! 엔티티는 저장 형식(snake_case, BSON 타입)을, DTO는 응답 형식(camelCase, RFC 3339 시간)을
//! 따릅니다. 엔티티에서 DTO로의 변환은 `From` 구현이나 DTO 생성자로 수행합니다.

pub mod entities;
pub mod dto;
pub mod models;
