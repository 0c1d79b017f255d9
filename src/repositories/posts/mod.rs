//! 게시물 저장소

pub mod post_repo;

pub use post_repo::{MongoPostRepository, PostStore, POSTS_COLLECTION};
