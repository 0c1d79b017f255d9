//! 게시물 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::dto::format_datetime;
use crate::domain::entities::posts::{Comment, Post};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub user: String,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            user: comment.user.to_hex(),
            name: comment.name,
            avatar: comment.avatar,
            text: comment.text,
            created_at: format_datetime(comment.created_at),
        }
    }
}

/// 게시물 응답 DTO
///
/// `likes`는 좋아요를 누른 사용자 ID 목록(최신순)입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub user: String,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub likes: Vec<String>,
    pub comments: Vec<CommentResponse>,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_hex(),
            user: post.user.to_hex(),
            name: post.name,
            avatar: post.avatar,
            text: post.text,
            likes: post.likes.iter().map(|id| id.to_hex()).collect(),
            comments: post.comments.into_iter().map(Into::into).collect(),
            created_at: format_datetime(post.created_at),
        }
    }
}
