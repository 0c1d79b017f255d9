//! # Profile HTTP Handlers
//!
//! 프로필과 그 안의 경력/학력 목록, 계정 삭제, GitHub 저장소 조회 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `GET` | `/profiles` | 필요 | 내 프로필 |
//! | `POST` | `/profiles` | 필요 | 프로필 생성/병합 |
//! | `DELETE` | `/profiles` | 필요 | 프로필과 계정 삭제 |
//! | `GET` | `/profiles/all` | - | 전체 프로필 |
//! | `GET` | `/profiles/user/{user_id}` | - | 사용자별 프로필 |
//! | `POST` | `/profiles/experience` | 필요 | 경력 추가 |
//! | `GET`/`DELETE` | `/profiles/experience/{id}` | 필요 | 경력 조회/삭제 |
//! | `POST` | `/profiles/education` | 필요 | 학력 추가 |
//! | `GET`/`DELETE` | `/profiles/education/{id}` | 필요 | 학력 조회/삭제 |
//! | `GET` | `/profiles/github/{username}` | - | 최근 GitHub 저장소 |

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::profiles::{
    EducationLookupResponse, EducationRequest, ExperienceLookupResponse, ExperienceRequest,
    GithubReposQuery, UpsertProfileRequest,
};
use crate::domain::dto::users::SuccessResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;
use crate::services::github::GithubService;
use crate::services::profiles::profile_service::PROFILE_NOT_FOUND;
use crate::services::profiles::ProfileService;
use crate::utils::string_utils::parse_object_id;

const ENTRY_NOT_FOUND: &str = "항목을 찾을 수 없습니다";

#[get("", wrap = "AuthMiddleware::required()")]
pub async fn get_own_profile(
    profiles: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = profiles.get_by_user(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// 프로필 생성 또는 전달된 필드 병합
///
/// # Endpoint
/// `POST /api/v1/profiles`
#[post("", wrap = "AuthMiddleware::required()")]
pub async fn upsert_profile(
    profiles: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<UpsertProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = profiles.upsert(&user.user_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// 프로필과 계정을 함께 삭제
///
/// # Endpoint
/// `DELETE /api/v1/profiles`
#[delete("", wrap = "AuthMiddleware::required()")]
pub async fn delete_account(
    profiles: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    profiles.delete_own(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

#[get("/all")]
pub async fn list_profiles(profiles: web::Data<ProfileService>) -> Result<HttpResponse, AppError> {
    let all = profiles.list_all().await?;
    Ok(HttpResponse::Ok().json(all))
}

#[get("/user/{user_id}")]
pub async fn get_profile_by_user(
    profiles: web::Data<ProfileService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = parse_object_id(&user_id, PROFILE_NOT_FOUND)?;

    let profile = profiles.get_by_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[post("/experience", wrap = "AuthMiddleware::required()")]
pub async fn add_experience(
    profiles: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<ExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = profiles.add_experience(&user.user_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[get("/experience/{id}", wrap = "AuthMiddleware::required()")]
pub async fn get_experience(
    profiles: web::Data<ProfileService>,
    user: AuthenticatedUser,
    entry_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let entry_id = parse_object_id(&entry_id, ENTRY_NOT_FOUND)?;

    let experience = profiles.get_experience(&user.user_id, &entry_id).await?;
    Ok(HttpResponse::Ok().json(ExperienceLookupResponse { success: true, experience }))
}

/// 경력 삭제. 없는 항목이면 변경 없이 현재 프로필을 돌려줍니다.
#[delete("/experience/{id}", wrap = "AuthMiddleware::required()")]
pub async fn remove_experience(
    profiles: web::Data<ProfileService>,
    user: AuthenticatedUser,
    entry_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let entry_id = parse_object_id(&entry_id, ENTRY_NOT_FOUND)?;

    let profile = profiles.remove_experience(&user.user_id, &entry_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[post("/education", wrap = "AuthMiddleware::required()")]
pub async fn add_education(
    profiles: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<EducationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let profile = profiles.add_education(&user.user_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[get("/education/{id}", wrap = "AuthMiddleware::required()")]
pub async fn get_education(
    profiles: web::Data<ProfileService>,
    user: AuthenticatedUser,
    entry_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let entry_id = parse_object_id(&entry_id, ENTRY_NOT_FOUND)?;

    let education = profiles.get_education(&user.user_id, &entry_id).await?;
    Ok(HttpResponse::Ok().json(EducationLookupResponse { success: true, education }))
}

#[delete("/education/{id}", wrap = "AuthMiddleware::required()")]
pub async fn remove_education(
    profiles: web::Data<ProfileService>,
    user: AuthenticatedUser,
    entry_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let entry_id = parse_object_id(&entry_id, ENTRY_NOT_FOUND)?;

    let profile = profiles.remove_education(&user.user_id, &entry_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// GitHub 최근 저장소 조회
///
/// # Endpoint
/// `GET /api/v1/profiles/github/{username}?limit=5`
#[get("/github/{username}")]
pub async fn github_repos(
    github: web::Data<GithubService>,
    username: web::Path<String>,
    query: web::Query<GithubReposQuery>,
) -> Result<HttpResponse, AppError> {
    let repos = github.recent_repos(&username, query.limit).await?;
    Ok(HttpResponse::Ok().json(repos))
}
