//! # Repositories Module
//!
//! 애그리거트별 저장소 포트(trait)와 구현체를 제공합니다.
//!
//! ```text
//! repositories/
//! ├── users/      ← UserStore + MongoUserRepository
//! ├── profiles/   ← ProfileStore + MongoProfileRepository
//! ├── posts/      ← PostStore + MongoPostRepository
//! └── memory/     ← 세 포트의 메모리 구현 (테스트, STORAGE_BACKEND=memory)
//! ```
//!
//! 서비스는 `Arc<dyn UserStore>`처럼 trait 객체만 보유하므로 저장소 구현을
//! 바꿔도 서비스 코드는 변하지 않습니다.

pub mod users;
pub mod profiles;
pub mod posts;
pub mod memory;

use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::db::Database;

use self::memory::{InMemoryPostRepository, InMemoryProfileRepository, InMemoryUserRepository};
use self::posts::{MongoPostRepository, PostStore};
use self::profiles::{MongoProfileRepository, ProfileStore};
use self::users::{MongoUserRepository, UserStore};

/// 서비스에 주입할 저장소 묶음
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub posts: Arc<dyn PostStore>,
}

impl Stores {
    /// MongoDB 저장소를 만들고 인덱스를 생성합니다.
    pub async fn mongo(database: &Database) -> AppResult<Self> {
        let users = MongoUserRepository::new(database);
        let profiles = MongoProfileRepository::new(database);
        let posts = MongoPostRepository::new(database);

        users.create_indexes().await?;
        profiles.create_indexes().await?;
        posts.create_indexes().await?;

        Ok(Self {
            users: Arc::new(users),
            profiles: Arc::new(profiles),
            posts: Arc::new(posts),
        })
    }

    /// 비어 있는 메모리 저장소
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }
}
