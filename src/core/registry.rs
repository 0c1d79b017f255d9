//! # Service Registry
//!
//! 애플리케이션 시작 시 한 번 조립되는 서비스 묶음입니다.
//! 저장소 백엔드([`Stores`])와 토큰 서비스를 받아 각 서비스를 생성하고,
//! `web::Data`로 감싸 Actix 앱 데이터에 등록합니다.
//!
//! ## 동작 흐름
//!
//! ```text
//! 1. main / 테스트
//!    ├─ Stores::mongo(&db) 또는 Stores::in_memory()
//!    └─ TokenService::from_env()
//!
//! 2. ServiceRegistry::new(...)
//!    ├─ AccountService  ← users, tokens
//!    ├─ ProfileService  ← profiles, users
//!    ├─ PostService     ← posts, users
//!    └─ GithubService
//!
//! 3. App::new().configure(|cfg| registry.configure(cfg))
//!    └─ 핸들러는 web::Data<T> 추출자로 서비스 사용
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::new(
//!     Stores::in_memory(),
//!     Arc::new(TokenService::from_env()),
//!     PasswordConfig::bcrypt_cost(),
//!     GithubService::from_env(),
//! );
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| registry.configure(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::repositories::Stores;
use crate::services::accounts::AccountService;
use crate::services::auth::TokenService;
use crate::services::github::GithubService;
use crate::services::posts::PostService;
use crate::services::profiles::ProfileService;

/// 워커 간에 공유되는 서비스 인스턴스 모음
///
/// 모든 필드는 `web::Data`(내부적으로 `Arc`)이므로 `clone`은 참조 카운트만 증가시킵니다.
#[derive(Clone)]
pub struct ServiceRegistry {
    tokens: web::Data<TokenService>,
    accounts: web::Data<AccountService>,
    profiles: web::Data<ProfileService>,
    posts: web::Data<PostService>,
    github: web::Data<GithubService>,
}

impl ServiceRegistry {
    pub fn new(
        stores: Stores,
        tokens: Arc<TokenService>,
        bcrypt_cost: u32,
        github: GithubService,
    ) -> Self {
        let accounts = AccountService::new(stores.users.clone(), tokens.clone(), bcrypt_cost);
        let profiles = ProfileService::new(stores.profiles.clone(), stores.users.clone());
        let posts = PostService::new(stores.posts.clone(), stores.users.clone());

        log::info!("서비스 레지스트리 초기화 완료");

        Self {
            tokens: web::Data::from(tokens),
            accounts: web::Data::new(accounts),
            profiles: web::Data::new(profiles),
            posts: web::Data::new(posts),
            github: web::Data::new(github),
        }
    }

    /// 앱 데이터로 모든 서비스를 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.tokens.clone())
            .app_data(self.accounts.clone())
            .app_data(self.profiles.clone())
            .app_data(self.posts.clone())
            .app_data(self.github.clone());
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenTransport;
    use actix_web::{test, App, HttpResponse};

    async fn probe(
        tokens: web::Data<TokenService>,
        _accounts: web::Data<AccountService>,
        _profiles: web::Data<ProfileService>,
        _posts: web::Data<PostService>,
        _github: web::Data<GithubService>,
    ) -> HttpResponse {
        HttpResponse::Ok().body(tokens.ttl_seconds().to_string())
    }

    #[actix_web::test]
    async fn test_configure_registers_every_service() {
        let registry = ServiceRegistry::new(
            Stores::in_memory(),
            Arc::new(TokenService::new(
                "secret",
                60,
                TokenTransport::Header("x-auth-token".to_string()),
            )),
            4,
            GithubService::new("http://127.0.0.1:9".to_string(), None, None),
        );

        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.configure(cfg))
                .route("/probe", web::get().to(probe)),
        )
        .await;

        let req = test::TestRequest::get().uri("/probe").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "60");
    }
}
