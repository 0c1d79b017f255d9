//! # Domain Entities Module
//!
//! MongoDB 문서와 1:1로 매핑되는 영속 엔티티를 정의합니다.
//!
//! ```text
//! entities/
//! ├── users/      ← 로그인 주체 (users 컬렉션)
//! ├── profiles/   ← 사용자당 하나의 프로필 + 경력/학력 (profiles 컬렉션)
//! └── posts/      ← 게시글 + 좋아요/댓글 (posts 컬렉션)
//! ```
//!
//! ## 공통 규칙
//!
//! - 모든 식별자는 `_id`로 저장되는 [`ObjectId`](mongodb::bson::oid::ObjectId)입니다.
//! - 포함 목록(경력, 학력, 좋아요, 댓글)은 최신 항목이 앞에 옵니다.
//! - 포함 항목의 변경은 애그리거트 문서 하나에 대한 원자적 연산으로만 수행됩니다.
//!   읽은 뒤 통째로 다시 쓰는 방식은 사용하지 않습니다.

pub mod users;
pub mod profiles;
pub mod posts;
