//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 제로 사이즈 구조체의 연관 함수로 제공합니다.
//! 환경 변수는 `main`에서 `PROFILE`에 따라 `.env.dev` / `.env.prod` 파일로 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 캐시, 요청 제한 설정
//! - [`auth_config`] - JWT 검증 설정
//! - [`profile_config`] - 사진 리다이렉트, 인증 연결 동기화 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export ENVIRONMENT="production"        # development, test, staging, production
//!
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="profile_service"
//! export REDIS_URL="redis://127.0.0.1:6379"
//! export PROFILE_CACHE_TTL="600"
//!
//! export JWT_SECRET="shared-secret-with-auth-service"
//!
//! export PHOTO_FILE_PREFIX="/api/file/get/"
//! export PHOTO_PLACEHOLDER="/images/default-user-icon-profile.png"
//! export AUTH_SYNC_CONCURRENCY="4"
//!
//! export RATE_LIMIT_PER_SECOND="10"
//! export RATE_LIMIT_BURST_SIZE="20"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod profile_config;

pub use data_config::*;
pub use auth_config::*;
pub use profile_config::*;
