//! # 게시물 리포지토리 구현
//!
//! 좋아요 토글은 파이프라인 업데이트 하나로 처리됩니다. 같은 게시물에 대한 동시
//! 토글이 서로의 결과를 덮어쓰지 않으며, 최종 좋아요 집합은 각 사용자의 토글
//! 횟수 홀짝으로 결정됩니다.
//!
//! ```text
//! likes = user ∈ likes ? likes - {user} : [user] ++ likes
//! ```
//!
//! ## 컬렉션 및 인덱스
//!
//! - **컬렉션명**: `posts`
//! - **인덱스**: `created_at`(desc)

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::posts::{Comment, Post};

pub const POSTS_COLLECTION: &str = "posts";

/// 게시물 저장소 포트
///
/// `Option<Post>`을 반환하는 변경 연산은 게시물이 없으면 `None`을 반환합니다.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert(&self, post: &Post) -> AppResult<()>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>>;

    /// 모든 게시물 (최신순)
    async fn list_recent(&self) -> AppResult<Vec<Post>>;

    /// 사용자의 좋아요를 원자적으로 토글하고 갱신된 게시물을 반환합니다.
    async fn toggle_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Post>>;

    /// 댓글 목록 맨 앞에 댓글 추가
    async fn push_comment(&self, post_id: &ObjectId, comment: &Comment) -> AppResult<Option<Post>>;

    /// `author`가 작성한 `comment_id` 댓글 제거
    async fn pull_comment(
        &self,
        post_id: &ObjectId,
        comment_id: &ObjectId,
        author: &ObjectId,
    ) -> AppResult<Option<Post>>;

    /// 게시물 삭제. 삭제된 문서가 있으면 `true`
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// MongoDB 기반 게시물 리포지토리
#[derive(Clone)]
pub struct MongoPostRepository {
    collection: Collection<Post>,
}

impl MongoPostRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<Post>(POSTS_COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_index(created_at_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_by_id(
        &self,
        post_id: &ObjectId,
        update: impl Into<mongodb::options::UpdateModifications>,
    ) -> AppResult<Option<Post>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": post_id }, update)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 좋아요 토글 파이프라인
///
/// 사용자가 이미 있으면 걸러내고, 없으면 맨 앞에 붙입니다.
fn toggle_like_pipeline(user_id: &ObjectId) -> Vec<Document> {
    let likes = doc! { "$ifNull": ["$likes", []] };

    vec![doc! {
        "$set": {
            "likes": {
                "$cond": [
                    { "$in": [user_id, likes.clone()] },
                    {
                        "$filter": {
                            "input": likes.clone(),
                            "as": "liker",
                            "cond": { "$ne": ["$$liker", user_id] }
                        }
                    },
                    { "$concatArrays": [[user_id], likes] }
                ]
            }
        }
    }]
}

#[async_trait]
impl PostStore for MongoPostRepository {
    async fn insert(&self, post: &Post) -> AppResult<()> {
        self.collection
            .insert_one(post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn list_recent(&self) -> AppResult<Vec<Post>> {
        let cursor = self.collection
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn toggle_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Post>> {
        self.update_by_id(post_id, toggle_like_pipeline(user_id)).await
    }

    async fn push_comment(&self, post_id: &ObjectId, comment: &Comment) -> AppResult<Option<Post>> {
        let comment = to_bson(comment).context("댓글 직렬화 실패")?;
        let update = doc! {
            "$push": {
                "comments": {
                    "$each": [comment],
                    "$position": 0
                }
            }
        };

        self.update_by_id(post_id, update).await
    }

    async fn pull_comment(
        &self,
        post_id: &ObjectId,
        comment_id: &ObjectId,
        author: &ObjectId,
    ) -> AppResult<Option<Post>> {
        let update = doc! {
            "$pull": { "comments": { "_id": comment_id, "user": author } }
        };

        self.update_by_id(post_id, update).await
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like_pipeline_shape() {
        let user_id = ObjectId::new();
        let pipeline = toggle_like_pipeline(&user_id);
        assert_eq!(pipeline.len(), 1);

        let likes = pipeline[0]
            .get_document("$set").unwrap()
            .get_document("likes").unwrap();
        let branches = likes.get_array("$cond").unwrap();
        assert_eq!(branches.len(), 3);

        let prepend = branches[2].as_document().unwrap().get_array("$concatArrays").unwrap();
        let head = prepend[0].as_array().unwrap();
        assert_eq!(head[0].as_object_id(), Some(user_id));
    }
}
