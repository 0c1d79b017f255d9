//! # 프로필 리포지토리 구현
//!
//! 프로필 애그리거트의 모든 변경은 문서 하나에 대한 원자적 연산으로 수행됩니다.
//!
//! | 연산 | MongoDB 연산자 |
//! |------|----------------|
//! | 필드 병합 | `$set` (점 표기법으로 소셜 링크 개별 갱신) |
//! | 경력/학력 추가 | `$push` + `$each` + `$position: 0` |
//! | 경력/학력 삭제 | `$pull` (`_id` 기준) |
//!
//! ## 컬렉션 및 인덱스
//!
//! - **컬렉션명**: `profiles`
//! - **인덱스**: `user`(unique), `handle`(unique)

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::{is_duplicate_key_error, Database};
use crate::domain::entities::profiles::{Education, Experience, Profile, ProfileChanges};

pub const PROFILES_COLLECTION: &str = "profiles";

/// 프로필 저장소 포트
///
/// `Option<Profile>`을 반환하는 변경 연산은 대상 사용자의 프로필이 없으면 `None`을 반환합니다.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_user(&self, user: &ObjectId) -> AppResult<Option<Profile>>;

    async fn find_by_handle(&self, handle: &str) -> AppResult<Option<Profile>>;

    /// 모든 프로필 (생성 순)
    async fn list_all(&self) -> AppResult<Vec<Profile>>;

    /// 새 프로필 저장. `user`/`handle` 중복 시 `ConflictError`
    async fn insert(&self, profile: &Profile) -> AppResult<()>;

    /// 전달된 필드만 병합하고 갱신된 프로필을 반환합니다.
    async fn update_fields(&self, user: &ObjectId, changes: &ProfileChanges) -> AppResult<Option<Profile>>;

    /// 경력 목록 맨 앞에 항목 추가
    async fn push_experience(&self, user: &ObjectId, entry: &Experience) -> AppResult<Option<Profile>>;

    /// 학력 목록 맨 앞에 항목 추가
    async fn push_education(&self, user: &ObjectId, entry: &Education) -> AppResult<Option<Profile>>;

    /// ID가 일치하는 경력 항목 제거. 일치하는 항목이 없어도 프로필을 반환합니다.
    async fn pull_experience(&self, user: &ObjectId, entry_id: &ObjectId) -> AppResult<Option<Profile>>;

    /// ID가 일치하는 학력 항목 제거. 일치하는 항목이 없어도 프로필을 반환합니다.
    async fn pull_education(&self, user: &ObjectId, entry_id: &ObjectId) -> AppResult<Option<Profile>>;

    /// 사용자의 프로필 삭제. 삭제된 문서가 있으면 `true`
    async fn delete_by_user(&self, user: &ObjectId) -> AppResult<bool>;
}

/// MongoDB 기반 프로필 리포지토리
#[derive(Clone)]
pub struct MongoProfileRepository {
    collection: Collection<Profile>,
}

impl MongoProfileRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<Profile>(PROFILES_COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // 사용자당 하나의 프로필
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_unique".to_string())
                .build())
            .build();

        // 핸들 유니크 인덱스
        let handle_index = IndexModel::builder()
            .keys(doc! { "handle": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("handle_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([user_index, handle_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 사용자 프로필에 갱신 연산을 적용하고 갱신 후 문서를 반환합니다.
    async fn update_by_user(&self, user: &ObjectId, update: Document) -> AppResult<Option<Profile>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "user": user }, update)
            .with_options(options)
            .await
            .map_err(map_write_error)
    }
}

/// 쓰기 에러 변환
///
/// 유니크 인덱스 위반은 어떤 인덱스인지에 따라 메시지를 구분합니다.
fn map_write_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key_error(&error) {
        if error.to_string().contains("handle") {
            AppError::ConflictError("이미 사용 중인 핸들입니다".to_string())
        } else {
            AppError::ConflictError("프로필이 이미 존재합니다".to_string())
        }
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

/// 목록 맨 앞에 항목 하나를 넣는 `$push` 문서
fn push_head(field: &str, entry: mongodb::bson::Bson) -> Document {
    doc! {
        "$push": {
            field: {
                "$each": [entry],
                "$position": 0
            }
        }
    }
}

/// `_id`가 일치하는 포함 항목을 제거하는 `$pull` 문서
fn pull_by_id(field: &str, entry_id: &ObjectId) -> Document {
    doc! { "$pull": { field: { "_id": entry_id } } }
}

#[async_trait]
impl ProfileStore for MongoProfileRepository {
    async fn find_by_user(&self, user: &ObjectId) -> AppResult<Option<Profile>> {
        self.collection
            .find_one(doc! { "user": user })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_handle(&self, handle: &str) -> AppResult<Option<Profile>> {
        self.collection
            .find_one(doc! { "handle": handle })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn list_all(&self) -> AppResult<Vec<Profile>> {
        let cursor = self.collection
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, profile: &Profile) -> AppResult<()> {
        self.collection
            .insert_one(profile)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    async fn update_fields(&self, user: &ObjectId, changes: &ProfileChanges) -> AppResult<Option<Profile>> {
        if changes.is_empty() {
            return self.find_by_user(user).await;
        }

        self.update_by_user(user, doc! { "$set": changes.to_set_document() }).await
    }

    async fn push_experience(&self, user: &ObjectId, entry: &Experience) -> AppResult<Option<Profile>> {
        let entry = to_bson(entry).context("경력 항목 직렬화 실패")?;
        self.update_by_user(user, push_head("experience", entry)).await
    }

    async fn push_education(&self, user: &ObjectId, entry: &Education) -> AppResult<Option<Profile>> {
        let entry = to_bson(entry).context("학력 항목 직렬화 실패")?;
        self.update_by_user(user, push_head("education", entry)).await
    }

    async fn pull_experience(&self, user: &ObjectId, entry_id: &ObjectId) -> AppResult<Option<Profile>> {
        self.update_by_user(user, pull_by_id("experience", entry_id)).await
    }

    async fn pull_education(&self, user: &ObjectId, entry_id: &ObjectId) -> AppResult<Option<Profile>> {
        self.update_by_user(user, pull_by_id("education", entry_id)).await
    }

    async fn delete_by_user(&self, user: &ObjectId) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "user": user })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
