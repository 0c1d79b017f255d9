//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - 설정된 전송 방식(헤더/쿠키)에서 신원 토큰 추출
//! - 토큰 검증 후 `AuthenticatedUser`를 request extension에 저장
//! - 실패 시 핸들러를 호출하지 않고 401 JSON 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/posts")
//!             .wrap(AuthMiddleware::required())
//!             .route("", web::get().to(list_posts))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
