//! JWT 토큰 검증 서비스
//!
//! HS256 서명과 만료 시간을 검증하고 클레임을 추출합니다.

use jsonwebtoken::{decode, errors::ErrorKind, DecodingKey, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    core::AppError,
    domain::models::token::TokenClaims,
};

#[service(name="token")]
pub struct TokenService {
    // 외부 의존성 없음
}

/// 주어진 비밀키로 토큰을 검증합니다.
///
/// 서명, 형식, 만료 등 모든 검증 실패는 `AuthenticationError`입니다.
pub fn decode_claims(token: &str, secret: &str, leeway: u64) -> Result<TokenClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.leeway = leeway;

    decode::<TokenClaims>(token, &decoding_key, &validation)
        .map(|token_data| token_data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
            },
            ErrorKind::InvalidSignature => {
                AppError::AuthenticationError("토큰 서명이 올바르지 않습니다".to_string())
            },
            _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
        })
}

impl TokenService {
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode_claims(token, &JwtConfig::secret(), JwtConfig::leeway_seconds())
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}

/// 현재 설정의 비밀키로 서명한 1시간짜리 토큰 (테스트 전용)
#[cfg(test)]
pub(crate) fn sign_for_tests(sub: &str, roles: &[&str]) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let now = chrono::Utc::now();
    let claims = TokenClaims {
        sub: sub.to_string(),
        roles: roles.iter().map(|role| role.to_string()).collect(),
        iat: now.timestamp(),
        exp: (now + chrono::Duration::hours(1)).timestamp(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(JwtConfig::secret().as_bytes()))
        .expect("test token")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token_with(secret: &str, exp_offset: Duration) -> String {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "65f0c1a2b3c4d5e6f7a8b9c0".to_string(),
            roles: vec!["user".to_string()],
            iat: now.timestamp(),
            exp: (now + exp_offset).timestamp(),
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[test]
    fn test_valid_token_is_decoded() {
        let token = token_with("secret", Duration::hours(1));
        let claims = decode_claims(&token, "secret", 0).unwrap();

        assert_eq!(claims.sub, "65f0c1a2b3c4d5e6f7a8b9c0");
        assert_eq!(claims.roles, vec!["user".to_string()]);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = token_with("secret", Duration::hours(-2));

        assert!(matches!(
            decode_claims(&token, "secret", 0),
            Err(AppError::AuthenticationError(msg)) if msg.contains("만료")
        ));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = token_with("secret", Duration::hours(1));

        assert!(matches!(
            decode_claims(&token, "other-secret", 0),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            decode_claims("garbage", "secret", 0),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
