//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//! 모든 API는 `/api/v1` 아래에 위치하며, 헬스체크만 루트에 있습니다.
//!
//! # Auth Middleware Usage
//!
//! ## 인증 불필요 (Public 라우트)
//! - `POST /api/v1/accounts`, `POST|DELETE /api/v1/sessions`
//! - `GET /api/v1/profiles/all`, `/user/{user_id}`, `/github/{username}`
//!
//! ## 리소스 단위 인증
//! `sessions`, `profiles` 스코프는 핸들러의 `wrap = "AuthMiddleware::required()"`로
//! 개별 라우트만 보호합니다.
//!
//! ## 스코프 단위 인증
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/posts")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::posts::list_posts)
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(|cfg| registry.configure(cfg))
//!     .configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 본문/경로/쿼리 추출 실패도 `AppError` JSON 형식으로 응답하도록
/// 추출자 설정을 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_account_routes(cfg);
    configure_profile_routes(cfg);
    configure_post_routes(cfg);
}

fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 경로 파라미터입니다: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", err)).into()
    }));
}

/// 계정/세션 라우트
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/accounts \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Alice","email":"alice@example.com","password":"secret1"}'
///
/// curl -X POST http://localhost:8080/api/v1/sessions \
///   -H "Content-Type: application/json" \
///   -d '{"email":"alice@example.com","password":"secret1"}'
/// ```
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounts")
            .service(handlers::accounts::register)
    );

    cfg.service(
        web::scope("/api/v1/sessions")
            .service(handlers::sessions::login)
            .service(handlers::sessions::logout)
            .service(handlers::sessions::current_user)
    );
}

/// 프로필 라우트 (공개/보호 혼합)
fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/profiles")
            .service(handlers::profiles::get_own_profile)
            .service(handlers::profiles::upsert_profile)
            .service(handlers::profiles::delete_account)
            .service(handlers::profiles::list_profiles)
            .service(handlers::profiles::get_profile_by_user)
            .service(handlers::profiles::add_experience)
            .service(handlers::profiles::get_experience)
            .service(handlers::profiles::remove_experience)
            .service(handlers::profiles::add_education)
            .service(handlers::profiles::get_education)
            .service(handlers::profiles::remove_education)
            .service(handlers::profiles::github_repos)
    );
}

/// 게시물 라우트 (전체 인증 필요)
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/posts/like/{id} \
///   -H "x-auth-token: eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// ```
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/posts")
            .wrap(AuthMiddleware::required())
            .service(handlers::posts::list_posts)
            .service(handlers::posts::create_post)
            .service(handlers::posts::toggle_like)
            .service(handlers::posts::add_comment)
            .service(handlers::posts::remove_comment)
            .service(handlers::posts::get_post)
            .service(handlers::posts::delete_post)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_feed_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::TokenTransport;
    use crate::core::registry::ServiceRegistry;
    use crate::repositories::Stores;
    use crate::services::auth::TokenService;
    use crate::services::github::GithubService;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    const TOKEN_HEADER: &str = "x-auth-token";

    fn registry(transport: TokenTransport) -> ServiceRegistry {
        ServiceRegistry::new(
            Stores::in_memory(),
            Arc::new(TokenService::new("routes-test-secret", 3600, transport)),
            4,
            GithubService::new("http://127.0.0.1:9".to_string(), None, None),
        )
    }

    macro_rules! register {
        ($app:expr, $name:expr, $email:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/v1/accounts")
                .set_json(json!({ "name": $name, "email": $email, "password": "secret1" }))
                .to_request();
            let resp = test::call_service(&$app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);

            let body: Value = test::read_body_json(resp).await;
            body["token"].as_str().unwrap().to_string()
        }};
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "social_feed_backend");
    }

    #[actix_web::test]
    async fn test_profile_and_like_flow() {
        let registry = registry(TokenTransport::Header(TOKEN_HEADER.to_string()));
        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let alice = register!(app, "Alice", "alice@example.com");
        let bob = register!(app, "Bob", "bob@example.com");

        // 토큰 없이 게시물 조회
        let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/v1/sessions")
            .insert_header((TOKEN_HEADER, bob.clone()))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        let bob_id = me["id"].as_str().unwrap().to_string();
        assert_eq!(me["name"], "Bob");
        assert!(me.get("passwordHash").is_none());

        let profile = json!({ "handle": "abc", "status": "Developer", "skills": "rust, go" });
        let req = test::TestRequest::post()
            .uri("/api/v1/profiles")
            .insert_header((TOKEN_HEADER, alice.clone()))
            .set_json(&profile)
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created["handle"], "abc");
        assert_eq!(created["skills"], json!(["rust", "go"]));

        let req = test::TestRequest::post()
            .uri("/api/v1/profiles")
            .insert_header((TOKEN_HEADER, bob.clone()))
            .set_json(&profile)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::post()
            .uri("/api/v1/posts")
            .insert_header((TOKEN_HEADER, alice.clone()))
            .set_json(json!({ "text": "hi" }))
            .to_request();
        let post: Value = test::call_and_read_body_json(&app, req).await;
        let like_uri = format!("/api/v1/posts/like/{}", post["id"].as_str().unwrap());

        let req = test::TestRequest::put()
            .uri(&like_uri)
            .insert_header((TOKEN_HEADER, bob.clone()))
            .to_request();
        let liked: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(liked["likes"], json!([bob_id]));

        let req = test::TestRequest::put()
            .uri(&like_uri)
            .insert_header((TOKEN_HEADER, bob.clone()))
            .to_request();
        let unliked: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(unliked["likes"], json!([]));
    }

    #[actix_web::test]
    async fn test_guarded_profile_and_session_routes_reject_missing_token() {
        let registry = registry(TokenTransport::Header(TOKEN_HEADER.to_string()));
        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let alice = register!(app, "Alice", "alice@example.com");
        let profile = json!({ "handle": "abc", "status": "Developer", "skills": "rust" });
        let req = test::TestRequest::post()
            .uri("/api/v1/profiles")
            .insert_header((TOKEN_HEADER, alice.clone()))
            .set_json(&profile)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let entry_id = mongodb::bson::oid::ObjectId::new().to_hex();
        let guarded = [
            test::TestRequest::get().uri("/api/v1/sessions"),
            test::TestRequest::get().uri("/api/v1/profiles"),
            test::TestRequest::post().uri("/api/v1/profiles").set_json(&profile),
            test::TestRequest::delete().uri("/api/v1/profiles"),
            test::TestRequest::post().uri("/api/v1/profiles/experience"),
            test::TestRequest::delete().uri(&format!("/api/v1/profiles/education/{}", entry_id)),
        ];
        for req in guarded {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "unauthenticated");
        }

        // 거부된 삭제 요청 이후에도 프로필은 남아 있음
        let req = test::TestRequest::get().uri("/api/v1/profiles/all").to_request();
        let profiles: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(profiles.as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn test_register_errors() {
        let registry = registry(TokenTransport::Header(TOKEN_HEADER.to_string()));
        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;

        register!(app, "Alice", "alice@example.com");

        let req = test::TestRequest::post()
            .uri("/api/v1/accounts")
            .set_json(json!({ "name": "Other", "email": "ALICE@example.com", "password": "secret1" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::post()
            .uri("/api/v1/accounts")
            .set_json(json!({ "email": "not-an-email", "password": "123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["errors"].as_array().is_some_and(|errors| errors.len() >= 2));

        let req = test::TestRequest::post()
            .uri("/api/v1/accounts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[actix_web::test]
    async fn test_cookie_session_flow() {
        let registry = registry(TokenTransport::Cookie { name: "token".to_string(), secure: false });
        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.configure(cfg))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/accounts")
            .set_json(json!({ "name": "Alice", "email": "alice@example.com", "password": "secret1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "token")
            .map(|c| c.into_owned())
            .unwrap();
        assert_eq!(cookie.http_only(), Some(true));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));

        let req = test::TestRequest::get()
            .uri("/api/v1/sessions")
            .cookie(cookie)
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["email"], "alice@example.com");

        let req = test::TestRequest::delete().uri("/api/v1/sessions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.response().cookies().any(|c| c.name() == "token" && c.value().is_empty()));
    }
}
