//! User Entity Implementation
//!
//! 인증 주체(Identity)를 나타내는 엔티티입니다. 이메일/비밀번호 기반 로컬 계정만 지원합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 이메일은 전역 유니크이며, 프로필 삭제 시 함께 삭제됩니다.
/// 비밀번호 해시는 응답 DTO로 변환할 때 항상 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique, 소문자 정규화)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 이메일에서 파생된 아바타 URL
    pub avatar: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            email,
            password_hash,
            avatar,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}
