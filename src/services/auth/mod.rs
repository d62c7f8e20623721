//! 인증 서비스 모듈
//!
//! 외부 인증 서비스가 발급한 JWT의 검증만 담당합니다.
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let token = token_service.extract_bearer_token(header)?;
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;

pub use token_service::*;
