//! Session HTTP Handlers
//!
//! 로그인(토큰 발급), 로그아웃(쿠키 제거), 현재 사용자 조회를 처리합니다.
//! 토큰은 상태 없이 검증되므로 로그아웃은 클라이언트 쪽 쿠키만 지웁니다.

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::{LoginRequest, SuccessResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;
use crate::services::accounts::AccountService;
use crate::services::auth::TokenService;

use super::token_response;

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/sessions`
#[post("")]
pub async fn login(
    accounts: web::Data<AccountService>,
    tokens: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = accounts.login(payload.into_inner()).await?;

    Ok(token_response(HttpResponse::Ok(), &tokens, token))
}

/// 로그아웃 핸들러. 항상 성공합니다.
///
/// # Endpoint
/// `DELETE /api/v1/sessions`
#[delete("")]
pub async fn logout(tokens: web::Data<TokenService>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(tokens.removal_cookie())
        .json(SuccessResponse::ok())
}

/// 현재 사용자 조회 (비밀번호 해시 제외)
///
/// # Endpoint
/// `GET /api/v1/sessions`
#[get("", wrap = "AuthMiddleware::required()")]
pub async fn current_user(
    accounts: web::Data<AccountService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let current = accounts.current(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(current))
}
