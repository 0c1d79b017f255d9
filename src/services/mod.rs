//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 저장소 트레이트(`Arc<dyn ...Store>`)를 생성자로 주입받아
//! MongoDB와 인메모리 백엔드 모두에서 동일하게 동작합니다.
//!
//! # Features
//!
//! - 계정 등록/로그인 및 신원 토큰 발급
//! - 프로필 생성/수정, 경력·학력 관리, 계정 삭제
//! - 게시물, 좋아요 토글, 댓글
//! - GitHub 최근 저장소 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::Stores;
//! use crate::services::posts::PostService;
//!
//! let stores = Stores::in_memory();
//! let posts = PostService::new(stores.posts.clone(), stores.users.clone());
//! ```

pub mod auth;
pub mod accounts;
pub mod profiles;
pub mod posts;
pub mod github;
