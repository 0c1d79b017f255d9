//! 신원 토큰 클레임
//!
//! 서명되는 페이로드는 `{ user: { id }, iat, exp }` 형태이며 저장되지 않습니다.

use serde::{Deserialize, Serialize};

/// 클레임 안의 사용자 식별 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimUser {
    /// 사용자 ID (ObjectId 16진수 문자열)
    pub id: String,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `user.id`: 토큰의 주체
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user: ClaimUser,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(user_id: String, issued_at: i64, ttl_seconds: i64) -> Self {
        Self {
            user: ClaimUser { id: user_id },
            iat: issued_at,
            exp: issued_at + ttl_seconds,
        }
    }
}
