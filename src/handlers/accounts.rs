//! Account HTTP Handlers
//!
//! 계정 생성 엔드포인트입니다. 가입에 성공하면 곧바로 신원 토큰을 발급합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/accounts` | 계정 생성 | 201 Created |

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::RegisterRequest;
use crate::services::accounts::AccountService;
use crate::services::auth::TokenService;

use super::token_response;

/// 계정 생성 핸들러
///
/// # Endpoint
/// `POST /api/v1/accounts`
///
/// # Errors
///
/// * `400` - 필드 검증 실패 (`errors` 목록 포함)
/// * `409` - 이미 사용 중인 이메일
#[post("")]
pub async fn register(
    accounts: web::Data<AccountService>,
    tokens: web::Data<TokenService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = accounts.register(payload.into_inner()).await?;

    Ok(token_response(HttpResponse::Created(), &tokens, token))
}
