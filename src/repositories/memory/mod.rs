//! # 메모리 저장소 구현
//!
//! `STORAGE_BACKEND=memory` 실행과 테스트에서 사용하는 HashMap 기반 저장소입니다.
//! MongoDB 구현과 같은 계약을 지킵니다.
//!
//! - 이메일/핸들/사용자당 프로필 유일성 위반은 `ConflictError`
//! - 포함 목록 변경은 락 하나를 잡은 상태에서 한 번에 적용 (원자적)
//! - 프로세스가 종료되면 모든 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::posts::{Comment, Post};
use crate::domain::entities::profiles::{Education, Experience, Profile, ProfileChanges};
use crate::domain::entities::users::User;
use crate::repositories::posts::PostStore;
use crate::repositories::profiles::ProfileStore;
use crate::repositories::users::UserStore;

fn read_lock<T>(lock: &RwLock<T>) -> AppResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| AppError::InternalError("메모리 저장소 락이 오염되었습니다".to_string()))
}

fn write_lock<T>(lock: &RwLock<T>) -> AppResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| AppError::InternalError("메모리 저장소 락이 오염되었습니다".to_string()))
}

/// 메모리 기반 사용자 저장소
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<ObjectId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = read_lock(&self.users)?;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = read_lock(&self.users)?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        let users = read_lock(&self.users)?;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        let mut users = write_lock(&self.users)?;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut users = write_lock(&self.users)?;
        Ok(users.remove(id).is_some())
    }
}

/// 메모리 기반 프로필 저장소 (사용자 ID를 키로 사용)
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<ObjectId, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 잠금 상태에서 사용자 프로필을 변경하고 변경 후 값을 반환합니다.
    fn modify<F>(&self, user: &ObjectId, f: F) -> AppResult<Option<Profile>>
    where
        F: FnOnce(&mut Profile),
    {
        let mut profiles = write_lock(&self.profiles)?;
        Ok(profiles.get_mut(user).map(|profile| {
            f(profile);
            profile.clone()
        }))
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileRepository {
    async fn find_by_user(&self, user: &ObjectId) -> AppResult<Option<Profile>> {
        let profiles = read_lock(&self.profiles)?;
        Ok(profiles.get(user).cloned())
    }

    async fn find_by_handle(&self, handle: &str) -> AppResult<Option<Profile>> {
        let profiles = read_lock(&self.profiles)?;
        Ok(profiles.values().find(|p| p.handle == handle).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Profile>> {
        let profiles = read_lock(&self.profiles)?;
        let mut all: Vec<Profile> = profiles.values().cloned().collect();
        all.sort_by_key(|p| (p.created_at, p.id));
        Ok(all)
    }

    async fn insert(&self, profile: &Profile) -> AppResult<()> {
        let mut profiles = write_lock(&self.profiles)?;
        if profiles.contains_key(&profile.user) {
            return Err(AppError::ConflictError("프로필이 이미 존재합니다".to_string()));
        }
        if profiles.values().any(|p| p.handle == profile.handle) {
            return Err(AppError::ConflictError("이미 사용 중인 핸들입니다".to_string()));
        }
        profiles.insert(profile.user, profile.clone());
        Ok(())
    }

    async fn update_fields(&self, user: &ObjectId, changes: &ProfileChanges) -> AppResult<Option<Profile>> {
        let mut profiles = write_lock(&self.profiles)?;

        if let Some(handle) = &changes.handle {
            let taken = profiles
                .values()
                .any(|p| &p.handle == handle && &p.user != user);
            if taken {
                return Err(AppError::ConflictError("이미 사용 중인 핸들입니다".to_string()));
            }
        }

        Ok(profiles.get_mut(user).map(|profile| {
            changes.apply(profile);
            profile.clone()
        }))
    }

    async fn push_experience(&self, user: &ObjectId, entry: &Experience) -> AppResult<Option<Profile>> {
        self.modify(user, |p| p.experience.insert(0, entry.clone()))
    }

    async fn push_education(&self, user: &ObjectId, entry: &Education) -> AppResult<Option<Profile>> {
        self.modify(user, |p| p.education.insert(0, entry.clone()))
    }

    async fn pull_experience(&self, user: &ObjectId, entry_id: &ObjectId) -> AppResult<Option<Profile>> {
        self.modify(user, |p| p.experience.retain(|e| &e.id != entry_id))
    }

    async fn pull_education(&self, user: &ObjectId, entry_id: &ObjectId) -> AppResult<Option<Profile>> {
        self.modify(user, |p| p.education.retain(|e| &e.id != entry_id))
    }

    async fn delete_by_user(&self, user: &ObjectId) -> AppResult<bool> {
        let mut profiles = write_lock(&self.profiles)?;
        Ok(profiles.remove(user).is_some())
    }
}

/// 메모리 기반 게시물 저장소
#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<ObjectId, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn modify<F>(&self, post_id: &ObjectId, f: F) -> AppResult<Option<Post>>
    where
        F: FnOnce(&mut Post),
    {
        let mut posts = write_lock(&self.posts)?;
        Ok(posts.get_mut(post_id).map(|post| {
            f(post);
            post.clone()
        }))
    }
}

#[async_trait]
impl PostStore for InMemoryPostRepository {
    async fn insert(&self, post: &Post) -> AppResult<()> {
        let mut posts = write_lock(&self.posts)?;
        posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>> {
        let posts = read_lock(&self.posts)?;
        Ok(posts.get(id).cloned())
    }

    async fn list_recent(&self) -> AppResult<Vec<Post>> {
        let posts = read_lock(&self.posts)?;
        let mut all: Vec<Post> = posts.values().cloned().collect();
        all.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(all)
    }

    async fn toggle_like(&self, post_id: &ObjectId, user_id: &ObjectId) -> AppResult<Option<Post>> {
        self.modify(post_id, |post| {
            post.toggle_like(*user_id);
        })
    }

    async fn push_comment(&self, post_id: &ObjectId, comment: &Comment) -> AppResult<Option<Post>> {
        self.modify(post_id, |post| post.comments.insert(0, comment.clone()))
    }

    async fn pull_comment(
        &self,
        post_id: &ObjectId,
        comment_id: &ObjectId,
        author: &ObjectId,
    ) -> AppResult<Option<Post>> {
        self.modify(post_id, |post| {
            post.comments.retain(|c| !(&c.id == comment_id && &c.user == author))
        })
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut posts = write_lock(&self.posts)?;
        Ok(posts.remove(id).is_some())
    }
}
