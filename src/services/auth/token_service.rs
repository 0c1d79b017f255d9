//! JWT 신원 토큰 서비스 구현
//!
//! HS256으로 서명된 `{ user: { id }, iat, exp }` 토큰을 발급/검증하고,
//! 배포 설정에 따라 헤더 또는 HttpOnly 쿠키에서 토큰을 찾습니다.
//!
//! 서명과 검증은 모두 동기 함수이며 `Result`로 결과를 돌려줍니다.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::HttpRequest;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::oid::ObjectId;

use crate::config::{JwtConfig, AuthTransportConfig, TokenTransport};
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::TokenClaims;

/// 검증 실패 시 항상 같은 메시지를 사용합니다 (만료/위조/형식 오류 구분 없음).
pub const INVALID_TOKEN_MESSAGE: &str = "유효하지 않은 토큰입니다";

/// 토큰 발급/검증 서비스
///
/// ```rust,ignore
/// let tokens = TokenService::new("secret", 36000, TokenTransport::default());
/// let token = tokens.issue(&user.id)?;
/// assert_eq!(tokens.verify(&token)?, user.id);
/// ```
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
    transport: TokenTransport,
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: i64, transport: TokenTransport) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
            transport,
        }
    }

    /// 환경 변수(`JWT_SECRET`, `JWT_EXPIRATION_SECONDS`, `AUTH_TRANSPORT` 등)에서 생성
    pub fn from_env() -> Self {
        Self::new(
            &JwtConfig::secret(),
            JwtConfig::expiration_seconds(),
            AuthTransportConfig::transport(),
        )
    }

    pub fn transport(&self) -> &TokenTransport {
        &self.transport
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// 사용자 ID에 대한 신원 토큰을 발급합니다.
    ///
    /// 서명 실패는 `InternalError`입니다.
    pub fn issue(&self, user_id: &ObjectId) -> AppResult<String> {
        let claims = TokenClaims::new(user_id.to_hex(), Utc::now().timestamp(), self.ttl_seconds);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 사용자 ID를 반환합니다.
    ///
    /// 서명 불일치, 형식 오류, 만료, 잘못된 사용자 ID는 모두 같은
    /// `AuthenticationError`가 됩니다.
    pub fn verify(&self, token: &str) -> AppResult<ObjectId> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {}", e);
                invalid_token()
            })?;

        ObjectId::parse_str(&claims.user.id).map_err(|_| invalid_token())
    }

    /// 설정된 전송 방식에 따라 요청에서 토큰을 찾습니다.
    ///
    /// 헤더 방식은 `Bearer ` 접두사가 있으면 제거합니다.
    pub fn extract_token(&self, req: &HttpRequest) -> Option<String> {
        let token = match &self.transport {
            TokenTransport::Header(name) => req
                .headers()
                .get(name.as_str())
                .and_then(|value| value.to_str().ok())
                .map(|value| {
                    let value = value.trim();
                    value.strip_prefix("Bearer ").unwrap_or(value).trim().to_string()
                }),
            TokenTransport::Cookie { name, .. } => req.cookie(name).map(|c| c.value().to_string()),
        };

        token.filter(|t| !t.is_empty())
    }

    /// 쿠키 전송 방식에서 토큰을 담는 HttpOnly 쿠키
    pub fn session_cookie(&self, token: String) -> Option<Cookie<'static>> {
        match &self.transport {
            TokenTransport::Cookie { name, secure } => Some(
                Cookie::build(name.clone(), token)
                    .path("/")
                    .http_only(true)
                    .secure(*secure)
                    .same_site(SameSite::Strict)
                    .max_age(CookieDuration::seconds(self.ttl_seconds))
                    .finish(),
            ),
            TokenTransport::Header(_) => None,
        }
    }

    /// 신원 쿠키를 지우는 만료 쿠키
    ///
    /// 헤더 방식에서도 기본 쿠키 이름으로 만들어 로그아웃 응답이 항상 같은 모양이 됩니다.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let (name, secure) = match &self.transport {
            TokenTransport::Cookie { name, secure } => (name.clone(), *secure),
            TokenTransport::Header(_) => ("token".to_string(), false),
        };

        let mut cookie = Cookie::build(name, "")
            .path("/")
            .http_only(true)
            .secure(secure)
            .same_site(SameSite::Strict)
            .finish();
        cookie.make_removal();
        cookie
    }
}

fn invalid_token() -> AppError {
    AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string())
}
