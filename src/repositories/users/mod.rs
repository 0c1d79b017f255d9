//! 사용자 저장소

pub mod user_repo;

pub use user_repo::{MongoUserRepository, UserStore, USERS_COLLECTION};
