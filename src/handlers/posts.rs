//! # Post HTTP Handlers
//!
//! 게시물, 좋아요, 댓글 엔드포인트입니다. 스코프 전체가 인증 미들웨어로 보호됩니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/posts` | 전체 게시물 (최신순) |
//! | `POST` | `/posts` | 게시물 작성 |
//! | `GET` | `/posts/{id}` | 게시물 조회 |
//! | `DELETE` | `/posts/{id}` | 게시물 삭제 (작성자만) |
//! | `PUT` | `/posts/like/{id}` | 좋아요 토글 |
//! | `POST` | `/posts/comment/{id}` | 댓글 작성 |
//! | `DELETE` | `/posts/{id}/comment/{comment_id}` | 댓글 삭제 (작성자만) |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::posts::{CommentPath, CommentRequest, CreatePostRequest};
use crate::domain::dto::users::SuccessResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::posts::post_service::{COMMENT_NOT_FOUND, POST_NOT_FOUND};
use crate::services::posts::PostService;
use crate::utils::string_utils::parse_object_id;

#[get("")]
pub async fn list_posts(posts: web::Data<PostService>) -> Result<HttpResponse, AppError> {
    let all = posts.list().await?;
    Ok(HttpResponse::Ok().json(all))
}

#[post("")]
pub async fn create_post(
    posts: web::Data<PostService>,
    user: AuthenticatedUser,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let post = posts.create(&user.user_id, &payload.text).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[get("/{id}")]
pub async fn get_post(
    posts: web::Data<PostService>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_object_id(&post_id, POST_NOT_FOUND)?;

    let post = posts.get(&post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[delete("/{id}")]
pub async fn delete_post(
    posts: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_object_id(&post_id, POST_NOT_FOUND)?;

    posts.delete(&post_id, &user.user_id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// 좋아요 토글. 응답의 `likes`는 최근 순서입니다.
#[put("/like/{id}")]
pub async fn toggle_like(
    posts: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_object_id(&post_id, POST_NOT_FOUND)?;

    let post = posts.toggle_like(&post_id, &user.user_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("/comment/{id}")]
pub async fn add_comment(
    posts: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let post_id = parse_object_id(&post_id, POST_NOT_FOUND)?;

    let post = posts.add_comment(&post_id, &user.user_id, &payload.text).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[delete("/{id}/comment/{comment_id}")]
pub async fn remove_comment(
    posts: web::Data<PostService>,
    user: AuthenticatedUser,
    path: web::Path<CommentPath>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_object_id(&path.id, POST_NOT_FOUND)?;
    let comment_id = parse_object_id(&path.comment_id, COMMENT_NOT_FOUND)?;

    let post = posts.remove_comment(&post_id, &comment_id, &user.user_id).await?;
    Ok(HttpResponse::Ok().json(post))
}
