//! Redis 캐시 클라이언트
//!
//! 프로필 문서를 JSON으로 직렬화하여 캐싱합니다. 키 규칙은 `{entity}:{id}`이며
//! 리포지토리 매크로가 생성하는 `cache_key` / `invalidate_cache`가 이 클라이언트를 사용합니다.

use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};
use std::env;

/// JSON 직렬화를 지원하는 Redis 클라이언트 래퍼
///
/// 요청마다 멀티플렉싱 연결을 얻어 사용하므로 `Clone`이 가볍습니다.
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
/// redis.set_with_expiry("profile:65f0c1...", &profile, 600).await?;
/// let cached: Option<UserProfile> = redis.get("profile:65f0c1...").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

fn serialization_error(stage: &'static str, e: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::TypeError, stage, e.to_string()))
}

impl RedisClient {
    /// `REDIS_URL`(기본값 `redis://localhost:6379`)로 연결하고 PING으로 가용성을 확인합니다.
    ///
    /// # Errors
    ///
    /// URL 형식이 잘못되었거나 서버에 연결할 수 없으면 에러를 반환합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;
        let redis = Self { client };
        redis.ping().await?;

        log::info!("✅ Redis 연결 성공");

        Ok(redis)
    }

    /// 서버 가용성 확인
    pub async fn ping(&self) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await
    }

    /// 키에 저장된 JSON을 역직렬화하여 반환합니다. 키가 없으면 `None`입니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| serde_json::from_str(&json).map_err(|e| serialization_error("Deserialization failed", e)))
            .transpose()
    }

    /// TTL 없이 값을 저장합니다. 기존 값은 덮어씁니다.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| serialization_error("Serialization failed", e))?;
        conn.set(key, json).await
    }

    /// 만료 시간(초)과 함께 값을 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| serialization_error("Serialization failed", e))?;
        conn.set_ex(key, json, seconds as u64).await
    }

    /// 키를 삭제합니다. 키가 없어도 성공입니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    /// 여러 키를 한 번에 삭제합니다. 빈 목록이면 즉시 반환합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    /// 패턴과 일치하는 키 목록 (`profile:*` 등)
    ///
    /// KEYS 명령은 서버를 블로킹하므로 컬렉션 단위 무효화에만 사용합니다.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }
}

impl Default for RedisClient {
    /// 연결 테스트 없이 클라이언트를 생성합니다.
    ///
    /// `Client::open`은 URL 파싱만 수행하므로 잘못된 `REDIS_URL`일 때만 패닉합니다.
    fn default() -> Self {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)
            .expect("Failed to create Redis client with default configuration");

        Self { client }
    }
}
