//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                  ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   ProfileService                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Store traits / Repositories         ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<ProfileService>`로 서비스를 받고, 에러는 `AppError`를
//! 그대로 반환하여 `ResponseError` 구현이 응답으로 변환합니다.
//!
//! ```rust,ignore
//! pub async fn get_self_view(
//!     service: web::Data<ProfileService>,
//!     user: AuthenticatedUser,
//! ) -> Result<HttpResponse, AppError> {
//!     let view = service.get_self_view(&user.user_id).await?;
//!     Ok(HttpResponse::Ok().json(view))
//! }
//! ```

pub mod profiles;
