//! 인증 관련 설정 관리 모듈
//!
//! 프로필 서비스는 토큰을 발급하지 않고 검증만 수행하므로
//! 서명 비밀키와 만료 허용 오차만 관리합니다.

use std::env;
use super::data_config::Environment;

/// JWT 검증 설정
///
/// 토큰은 외부 인증 서비스가 HS256으로 발급하며, 이 서비스는 동일한
/// 비밀키로 서명을 검증합니다.
///
/// ```bash
/// export JWT_SECRET="shared-secret-with-auth-service"
/// export JWT_LEEWAY_SECONDS="30"
/// ```
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 검증에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                if Environment::current().is_production() {
                    log::error!("JWT_SECRET not set in production, using development default");
                } else {
                    log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                }
                "your-secret-key".to_string()
            })
    }

    /// 만료 시각 검증 시 허용할 시계 오차(초). 기본값: 0
    pub fn leeway_seconds() -> u64 {
        env::var("JWT_LEEWAY_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_never_empty() {
        assert!(!JwtConfig::secret().is_empty());
    }

    #[test]
    fn test_leeway_default() {
        if env::var("JWT_LEEWAY_SECONDS").is_err() {
            assert_eq!(JwtConfig::leeway_seconds(), 0);
        }
    }
}
