//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청 본문 검증과 경로 파라미터 해석만 담당하고, 나머지는 서비스 계층에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - Mongo / InMemory 저장소         ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`accounts`**: 계정 생성 (`POST /accounts`)
//! - **`sessions`**: 로그인, 로그아웃, 현재 사용자 (`/sessions`)
//! - **`profiles`**: 프로필, 경력/학력, 계정 삭제, GitHub 저장소 (`/profiles`)
//! - **`posts`**: 게시물, 좋아요, 댓글 (`/posts`)
//!
//! 서비스는 `web::Data<T>` 추출자로 받습니다. 등록은 [`crate::core::ServiceRegistry`]가 합니다.

use actix_web::{HttpResponse, HttpResponseBuilder};

use crate::domain::dto::users::{SuccessResponse, TokenResponse};
use crate::services::auth::TokenService;

pub mod accounts;
pub mod sessions;
pub mod profiles;
pub mod posts;

/// 발급된 토큰을 설정된 전송 방식으로 응답에 싣습니다.
///
/// - 헤더 방식: 본문 `{ "token": ... }`
/// - 쿠키 방식: HttpOnly 쿠키 + 본문 `{ "success": true }`
fn token_response(mut builder: HttpResponseBuilder, tokens: &TokenService, token: String) -> HttpResponse {
    match tokens.session_cookie(token.clone()) {
        Some(cookie) => builder.cookie(cookie).json(SuccessResponse::ok()),
        None => builder.json(TokenResponse { token }),
    }
}
