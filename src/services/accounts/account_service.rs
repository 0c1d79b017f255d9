//! # 계정 서비스 구현
//!
//! 이메일/비밀번호 기반 계정 생성과 로그인을 담당합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost, 해싱과 검증은 `web::block`의 블로킹 스레드풀에서 실행
//! - **실패 메시지 통일**: 없는 이메일과 틀린 비밀번호는 같은 메시지의 401
//! - **민감 정보 제거**: 토큰과 응답 DTO에 비밀번호/해시가 포함되지 않음
//!
//! ```text
//! register ──▶ 이메일 중복 확인 ──▶ 아바타 URL 생성 ──▶ bcrypt ──▶ 저장 ──▶ 토큰 발급
//! login    ──▶ 이메일 조회 ──▶ bcrypt 검증 ──▶ 토큰 발급
//! ```

use std::sync::Arc;

use actix_web::web;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{LoginRequest, RegisterRequest, UserResponse};
use crate::domain::entities::users::User;
use crate::repositories::users::UserStore;
use crate::services::auth::TokenService;
use crate::utils::avatar::avatar_url;
use crate::utils::string_utils::{normalize_email, validate_required_string};

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

pub struct AccountService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self { users, tokens, bcrypt_cost }
    }

    /// 새 계정을 만들고 신원 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `FieldValidation` - 이름/이메일/비밀번호 형식 오류
    /// * `ConflictError` - 이미 사용 중인 이메일
    /// * `InternalError` - 해싱 또는 서명 실패
    pub async fn register(&self, request: RegisterRequest) -> AppResult<String> {
        let name = validate_required_string(request.trimmed_name(), "이름")?;
        let email = normalize_email(&request.email);

        if self.users.find_by_email(&email).await?.is_some() {
            log::warn!("중복 이메일 가입 시도: {}", email);
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = self.hash_password(request.password).await?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let avatar = avatar_url(&email);
        let user = User::new(name, email, password_hash, avatar);

        // 동시 가입으로 확인을 통과한 경우 저장소가 ConflictError를 반환합니다.
        self.users.insert(&user).await?;
        log::info!("새 계정 생성: {} ({})", user.email, user.id_string());

        self.tokens.issue(&user.id)
    }

    /// 이메일/비밀번호를 확인하고 신원 토큰을 발급합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<String> {
        let email = normalize_email(&request.email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패 (없는 이메일): {}", email);
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
        };

        let password = request.password;
        let password_hash = user.password_hash.clone();
        let is_valid = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        log::info!("로그인 성공: {}", user.email);
        self.tokens.issue(&user.id)
    }

    /// 현재 사용자 정보 (비밀번호 해시 제외)
    pub async fn current(&self, user_id: &ObjectId) -> AppResult<UserResponse> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    async fn hash_password(&self, password: String) -> AppResult<String> {
        let cost = self.bcrypt_cost;

        web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }
}
