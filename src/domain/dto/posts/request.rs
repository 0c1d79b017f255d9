//! 게시물 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 게시물 작성 요청 DTO
///
/// 공백만 있는 본문은 서비스 계층에서 다시 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "내용은 필수입니다"))]
    #[serde(default)]
    pub text: String,
}

/// 댓글 작성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "내용은 필수입니다"))]
    #[serde(default)]
    pub text: String,
}

/// 댓글 삭제 경로 파라미터 (`/posts/{id}/comment/{comment_id}`)
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPath {
    pub id: String,
    pub comment_id: String,
}
