//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer JWT 검증 후 `AuthenticatedUser`를 request extension에 저장
//! - 필수(`required`) / 선택(`optional`) 인증 모드
//! - 역할 요구사항 (`required_with_roles`)
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/v1/user/info")
//!             .wrap(AuthMiddleware::optional())
//!             .route("/{id}", web::get().to(get_public_view))
//!     )
//!     .service(
//!         web::scope("/api/v1/user")
//!             .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
//!             .route("", web::get().to(get_self_view))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
