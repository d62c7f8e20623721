//! # Application Error Handling System
//!
//! 프로필 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! ### 1. 인프라 계층 에러
//! - `DatabaseError`: MongoDB 연산 실패
//! - `RedisError`: 캐시 연산 실패
//!
//! ### 2. 협력 저장소 에러
//! - `LookupError`: 프로필/인증 연결/이메일/태그 조회 실패
//! - `SyncError`: 인증 연결 정리(삭제) 도중 실패
//!
//! ### 3. 요청 계층 에러
//! - `ValidationError`: 입력값 검증 실패 또는 저장소의 저장 거부
//! - `NotFound`: 대상 프로필 없음
//! - `InvalidOperation`: 지원하지 않는 동작 요청
//! - `AuthenticationError`: 인증 토큰 누락 또는 검증 실패
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `LookupError` | 400 Bad Request |
//! | `SyncError` | 400 Bad Request |
//! | `InvalidOperation` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `RedisError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |

use std::fmt;
use thiserror::Error;

/// 실패한 협력 저장소
///
/// 조회/동기화 에러가 어느 의존성에서 발생했는지 진단할 수 있도록
/// 에러와 함께 전달됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// 사용자 프로필 저장소
    Profile,
    /// 외부 인증 프로바이더 연결 저장소
    AuthLink,
    /// 등록 이메일 저장소
    Email,
    /// 태그 조립기
    Tag,
}

impl Dependency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dependency::Profile => "profile",
            Dependency::AuthLink => "auth_link",
            Dependency::Email => "email",
            Dependency::Tag => "tag",
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// # 에러 변환 패턴
///
/// ```rust,ignore
/// // 저장소 에러를 의존성 정보와 함께 조회 실패로 변환
/// let emails = self.emails.find_by_user_id(user_id).await
///     .map_err(|e| AppError::lookup(Dependency::Email, e))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 또는 저장 거부 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 협력 저장소 조회 실패 (400 Bad Request)
    #[error("Lookup error ({dependency}): {message}")]
    LookupError {
        dependency: Dependency,
        message: String,
    },

    /// 인증 연결 정리 도중 삭제 실패 (400 Bad Request)
    ///
    /// 이미 삭제된 연결은 되돌리지 않습니다.
    #[error("Sync error ({dependency}): {message}")]
    SyncError {
        dependency: Dependency,
        message: String,
    },

    /// 지원하지 않는 동작 (400 Bad Request)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 의존성 조회 실패 에러를 생성합니다.
    pub fn lookup(dependency: Dependency, source: impl fmt::Display) -> Self {
        AppError::LookupError {
            dependency,
            message: source.to_string(),
        }
    }

    /// 의존성 동기화 실패 에러를 생성합니다.
    pub fn sync(dependency: Dependency, source: impl fmt::Display) -> Self {
        AppError::SyncError {
            dependency,
            message: source.to_string(),
        }
    }

    /// 조회/동기화 에러라면 실패한 의존성을 반환합니다.
    pub fn dependency(&self) -> Option<Dependency> {
        match self {
            AppError::LookupError { dependency, .. } | AppError::SyncError { dependency, .. } => {
                Some(*dependency)
            }
            _ => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::LookupError { .. }
            | AppError::SyncError { .. }
            | AppError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따르며, 조회/동기화 에러는
    /// 실패한 의존성 이름을 `dependency` 필드로 함께 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut body = serde_json::json!({
            "error": self.to_string()
        });

        if let Some(dependency) = self.dependency() {
            body["dependency"] = serde_json::Value::from(dependency.as_str());
        }

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("사용자 저장 중 오류가 발생했습니다".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_dependency_errors_are_client_errors() {
        let lookup = AppError::lookup(Dependency::Email, "connection reset");
        let sync = AppError::sync(Dependency::AuthLink, "delete failed");

        assert_eq!(lookup.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(sync.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_dependency_is_reported() {
        let lookup = AppError::lookup(Dependency::Tag, "timeout");

        assert_eq!(lookup.dependency(), Some(Dependency::Tag));
        assert!(lookup.to_string().contains("tag"));
        assert!(lookup.to_string().contains("timeout"));
        assert_eq!(AppError::NotFound("x".to_string()).dependency(), None);
    }

    #[test]
    fn test_invalid_operation_response() {
        let error = AppError::InvalidOperation("지원하지 않는 요청입니다".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());

        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::DatabaseError("pool exhausted".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
