//! # 게시물 서비스 구현
//!
//! 게시물 작성/조회/삭제와 좋아요·댓글 변경을 담당합니다.
//!
//! - 작성자 이름과 아바타는 작성 시점 값으로 복사되며 이후 동기화되지 않습니다.
//! - 좋아요 토글, 댓글 추가/삭제는 저장소의 원자적 연산 하나로 수행됩니다.
//! - 삭제 권한 검사는 존재 확인 이후에 수행합니다 (없음 → 404, 남의 것 → 403).

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::posts::PostResponse;
use crate::domain::entities::posts::{Comment, Post};
use crate::domain::entities::users::User;
use crate::repositories::posts::PostStore;
use crate::repositories::users::UserStore;
use crate::utils::string_utils::validate_required_string;

pub const POST_NOT_FOUND: &str = "게시물을 찾을 수 없습니다";
pub const COMMENT_NOT_FOUND: &str = "댓글을 찾을 수 없습니다";

pub struct PostService {
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, users: Arc<dyn UserStore>) -> Self {
        Self { posts, users }
    }

    /// 게시물 작성
    pub async fn create(&self, author_id: &ObjectId, text: &str) -> AppResult<PostResponse> {
        let text = validate_required_string(text, "내용")?;
        let author = self.author(author_id).await?;

        let post = Post::by(&author, text);
        self.posts.insert(&post).await?;

        Ok(post.into())
    }

    pub async fn get(&self, post_id: &ObjectId) -> AppResult<PostResponse> {
        Ok(self.find(post_id).await?.into())
    }

    /// 전체 게시물 (최신순)
    pub async fn list(&self) -> AppResult<Vec<PostResponse>> {
        let posts = self.posts.list_recent().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    /// 좋아요 토글. 두 번 호출하면 원래 상태로 돌아갑니다.
    pub async fn toggle_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> AppResult<PostResponse> {
        self.posts
            .toggle_like(post_id, user_id)
            .await?
            .map(Into::into)
            .ok_or_else(post_not_found)
    }

    /// 댓글을 목록 맨 앞에 추가합니다.
    pub async fn add_comment(&self, post_id: &ObjectId, user_id: &ObjectId, text: &str) -> AppResult<PostResponse> {
        let text = validate_required_string(text, "내용")?;
        let author = self.author(user_id).await?;

        let comment = Comment::by(&author, text);
        self.posts
            .push_comment(post_id, &comment)
            .await?
            .map(Into::into)
            .ok_or_else(post_not_found)
    }

    /// 댓글 삭제 (작성자만 가능)
    pub async fn remove_comment(
        &self,
        post_id: &ObjectId,
        comment_id: &ObjectId,
        requester: &ObjectId,
    ) -> AppResult<PostResponse> {
        let post = self.find(post_id).await?;

        let comment = post
            .find_comment(comment_id)
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))?;

        if &comment.user != requester {
            log::warn!("타인의 댓글 삭제 시도: comment {} by user {}", comment_id, requester);
            return Err(AppError::AuthorizationError("댓글 작성자만 삭제할 수 있습니다".to_string()));
        }

        self.posts
            .pull_comment(post_id, comment_id, requester)
            .await?
            .map(Into::into)
            .ok_or_else(post_not_found)
    }

    /// 게시물 삭제 (작성자만 가능)
    pub async fn delete(&self, post_id: &ObjectId, requester: &ObjectId) -> AppResult<()> {
        let post = self.find(post_id).await?;

        if !post.is_authored_by(requester) {
            log::warn!("타인의 게시물 삭제 시도: post {} by user {}", post_id, requester);
            return Err(AppError::AuthorizationError("게시물 작성자만 삭제할 수 있습니다".to_string()));
        }

        self.posts.delete(post_id).await?;
        Ok(())
    }

    async fn find(&self, post_id: &ObjectId) -> AppResult<Post> {
        self.posts.find_by_id(post_id).await?.ok_or_else(post_not_found)
    }

    async fn author(&self, user_id: &ObjectId) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))
    }
}

fn post_not_found() -> AppError {
    AppError::NotFound(POST_NOT_FOUND.to_string())
}
