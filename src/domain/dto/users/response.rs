//! 계정/세션 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::dto::format_datetime;
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 어떤 경우에도 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, email, avatar, created_at, .. } = user;

        Self {
            id: id.to_hex(),
            name,
            email,
            avatar,
            created_at: format_datetime(created_at),
        }
    }
}

/// 헤더 전송 방식에서 발급된 토큰 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// 쿠키 전송 방식 등 본문에 데이터가 없는 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User::new(
            "Alice".to_string(),
            "a@x.io".to_string(),
            "$2b$04$secret".to_string(),
            "https://www.gravatar.com/avatar/abc".to_string(),
        );
        let id = user.id_string();

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["id"], id);
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("$2b$04$secret"));
        assert!(json["createdAt"].is_string());
    }
}
