//! 프로필 저장소

pub mod profile_repo;

pub use profile_repo::{MongoProfileRepository, ProfileStore, PROFILES_COLLECTION};
