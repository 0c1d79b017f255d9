//! Post Aggregate
//!
//! 게시글과 그에 포함된 좋아요/댓글을 정의합니다.
//! 작성자 이름과 아바타는 작성 시점 값이 복사되어 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 댓글
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 작성자 ID
    pub user: ObjectId,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub created_at: DateTime,
}

impl Comment {
    pub fn by(author: &User, text: String) -> Self {
        Self {
            id: ObjectId::new(),
            user: author.id,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            text,
            created_at: DateTime::now(),
        }
    }
}

/// 게시글 애그리거트 루트
///
/// `likes`에는 같은 사용자가 두 번 이상 들어가지 않으며 최신 좋아요가 앞에 옵니다.
/// `comments`도 최신 댓글이 앞에 옵니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 작성자 ID
    pub user: ObjectId,
    pub name: String,
    pub avatar: String,
    pub text: String,
    #[serde(default)]
    pub likes: Vec<ObjectId>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime,
}

impl Post {
    pub fn by(author: &User, text: String) -> Self {
        Self {
            id: ObjectId::new(),
            user: author.id,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            text,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: DateTime::now(),
        }
    }

    pub fn is_authored_by(&self, user_id: &ObjectId) -> bool {
        &self.user == user_id
    }

    /// 좋아요를 토글합니다. 좋아요 상태가 되면 `true`를 반환합니다.
    pub fn toggle_like(&mut self, user_id: ObjectId) -> bool {
        if let Some(index) = self.likes.iter().position(|id| id == &user_id) {
            self.likes.remove(index);
            false
        } else {
            self.likes.insert(0, user_id);
            true
        }
    }

    pub fn find_comment(&self, comment_id: &ObjectId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == comment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> User {
        User::new(
            "Alice".to_string(),
            "a@x.io".to_string(),
            "hash".to_string(),
            "https://www.gravatar.com/avatar/abc".to_string(),
        )
    }

    #[test]
    fn test_post_copies_author_snapshot() {
        let user = author();
        let post = Post::by(&user, "hello".to_string());

        assert_eq!(post.user, user.id);
        assert_eq!(post.name, "Alice");
        assert_eq!(post.avatar, user.avatar);
        assert!(post.is_authored_by(&user.id));
        assert!(!post.is_authored_by(&ObjectId::new()));
    }

    #[test]
    fn test_toggle_like_twice_restores_state() {
        let mut post = Post::by(&author(), "hello".to_string());
        let first = ObjectId::new();
        let second = ObjectId::new();

        assert!(post.toggle_like(first));
        assert!(post.toggle_like(second));
        assert_eq!(post.likes, vec![second, first]);

        assert!(!post.toggle_like(second));
        assert_eq!(post.likes, vec![first]);
    }
}
