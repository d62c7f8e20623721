//! 캐싱 계층 모듈
//!
//! 프로필 조회를 위한 Redis read-through 캐시를 제공합니다.
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("profile:65f0c1a2b3c4d5e6f7a8b9c0", &profile, 600).await?;
//! let cached: Option<UserProfile> = cache.get("profile:65f0c1a2b3c4d5e6f7a8b9c0").await?;
//! ```
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
