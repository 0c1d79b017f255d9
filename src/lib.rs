//! 소셜 피드 백엔드
//!
//! 개발자 프로필과 게시물 피드를 제공하는 Rust 기반 REST 서비스입니다.
//! 계정은 이메일/비밀번호로 만들고, 이후 요청은 HS256 신원 토큰으로 인증합니다.
//!
//! # Features
//!
//! - **계정/세션**: 가입, 로그인, 로그아웃, 헤더 또는 HttpOnly 쿠키 토큰 전달
//! - **프로필**: 핸들 유일성, 부분 병합, 경력/학력 목록, GitHub 저장소 조회
//! - **게시물**: 작성/삭제, 원자적 좋아요 토글, 댓글
//! - **저장소**: MongoDB (원자적 문서 연산) 또는 메모리 백엔드
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / ProfileStore / PostStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use social_feed_backend::core::ServiceRegistry;
//! use social_feed_backend::repositories::Stores;
//! use social_feed_backend::services::{auth::TokenService, github::GithubService};
//!
//! let registry = ServiceRegistry::new(
//!     Stores::in_memory(),
//!     Arc::new(TokenService::from_env()),
//!     10,
//!     GithubService::from_env(),
//! );
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
