//! 계정/세션 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청 DTO
///
/// JSON 역직렬화 후 `validate()`로 필드 단위 검증을 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 표시 이름
    #[validate(length(min = 1, max = 50, message = "이름은 필수입니다"))]
    #[serde(default)]
    pub name: String,

    /// 로그인 이메일 (저장 시 소문자로 정규화)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[serde(default)]
    pub email: String,

    /// 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    /// 공백만 있는 이름은 길이 검증을 통과하므로 trim한 값을 따로 확인합니다.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[serde(default)]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    #[serde(default)]
    pub password: String,
}
