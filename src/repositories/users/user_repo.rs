//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. 서비스는 [`UserStore`] trait에만
//! 의존하고, 실제 구현(MongoDB 또는 메모리)은 시작 시점에 주입됩니다.
//!
//! ## 컬렉션 및 인덱스
//!
//! - **컬렉션명**: `users`
//! - **인덱스**: `email`(unique), `created_at`(desc)

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::{is_duplicate_key_error, Database};
use crate::domain::entities::users::User;

pub const USERS_COLLECTION: &str = "users";

/// 사용자 저장소 포트
///
/// 이메일 유일성은 구현체가 보장해야 하며, 위반 시 `ConflictError`를 반환합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 정규화된 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 여러 ID의 사용자를 한 번에 조회 (순서 보장 없음)
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>>;

    /// 새 사용자 저장
    async fn insert(&self, user: &User) -> AppResult<()>;

    /// 사용자 삭제. 삭제된 문서가 있으면 `true`
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// 중복 확인은 서비스에서 먼저 수행하지만, 동시 가입 요청이 모두 확인을 통과하는
/// 경우는 `email` 유니크 인덱스가 막습니다. 이때 발생하는 E11000 에러는
/// `ConflictError`로 변환됩니다.
///
/// ```rust,ignore
/// let users = MongoUserRepository::new(&database);
/// users.create_indexes().await?;
///
/// if users.find_by_email("alice@example.com").await?.is_some() {
///     return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
/// }
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<User>(USERS_COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        match self.collection.insert_one(user).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key_error(&e) => {
                Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()))
            }
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
