//! # Domain Layer
//!
//! ```text
//! domain/
//! ├── entities/   ← 영속 엔티티 (User, Profile, Post)
//! ├── models/     ← 인증 주체, 토큰 클레임 등 값 객체
//! └── dto/        ← HTTP 요청/응답 객체
//! ```

pub mod entities;
pub mod models;
pub mod dto;
