//! 인증 관련 설정
//!
//! JWT 서명 키와 만료 정책, 그리고 배포 환경별 토큰 전달 방식(헤더 또는 쿠키)을
//! 환경 변수에서 읽어옵니다.
//!
//! # 환경 변수
//!
//! ```bash
//! JWT_SECRET=change-me
//! JWT_EXPIRATION_SECONDS=36000      # 기본값 10시간
//! AUTH_TRANSPORT=header             # header | cookie
//! AUTH_HEADER_NAME=Authorization    # header 모드에서 사용
//! AUTH_COOKIE_NAME=token            # cookie 모드에서 사용
//! AUTH_COOKIE_SECURE=true           # 미설정 시 운영 환경에서만 true
//! ```

use std::env;
use crate::config::Environment;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 토큰 유효 기간 (초)
    pub fn expiration_seconds() -> i64 {
        env::var("JWT_EXPIRATION_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &i64| *v > 0)
            .unwrap_or(36000)
    }
}

/// 클라이언트가 토큰을 실어 보내는 방식
///
/// 하나의 배포는 둘 중 정확히 하나만 사용합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenTransport {
    /// 지정한 헤더에 원시 토큰(또는 `Bearer <token>`)을 담아 전달
    Header(String),
    /// 지정한 이름의 HttpOnly 쿠키로 전달
    Cookie {
        name: String,
        secure: bool,
    },
}

impl TokenTransport {
    /// 설정 문자열로부터 전달 방식을 결정합니다. 알 수 없는 값은 header로 처리합니다.
    pub fn from_parts(mode: &str, header_name: String, cookie_name: String, secure: bool) -> Self {
        match mode.trim().to_lowercase().as_str() {
            "cookie" => TokenTransport::Cookie { name: cookie_name, secure },
            _ => TokenTransport::Header(header_name),
        }
    }
}

impl Default for TokenTransport {
    fn default() -> Self {
        TokenTransport::Header("Authorization".to_string())
    }
}

pub struct AuthTransportConfig;

impl AuthTransportConfig {
    pub fn transport() -> TokenTransport {
        let mode = env::var("AUTH_TRANSPORT").unwrap_or_else(|_| "header".to_string());
        let header_name = env::var("AUTH_HEADER_NAME").unwrap_or_else(|_| "Authorization".to_string());
        let cookie_name = env::var("AUTH_COOKIE_NAME").unwrap_or_else(|_| "token".to_string());
        let secure = env::var("AUTH_COOKIE_SECURE")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or_else(|| Environment::current() == Environment::Production);

        TokenTransport::from_parts(&mode, header_name, cookie_name, secure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_from_parts() {
        assert_eq!(
            TokenTransport::from_parts("cookie", "Authorization".into(), "token".into(), true),
            TokenTransport::Cookie { name: "token".into(), secure: true }
        );
        assert_eq!(
            TokenTransport::from_parts("HEADER", "x-auth-token".into(), "token".into(), false),
            TokenTransport::Header("x-auth-token".into())
        );

        // 알 수 없는 값은 header 모드
        assert_eq!(
            TokenTransport::from_parts("both", "Authorization".into(), "token".into(), false),
            TokenTransport::Header("Authorization".into())
        );
    }

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_SECONDS").is_err() {
            assert_eq!(JwtConfig::expiration_seconds(), 36000);
        }
    }
}
