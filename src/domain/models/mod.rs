//! # Domain Models Module
//!
//! 영속되지 않는 값 객체를 정의합니다.
//!
//! ```text
//! models/
//! ├── auth/    ← AuthenticatedUser (가드가 요청에 첨부하는 호출자 정보)
//! └── token/   ← TokenClaims (서명되는 토큰 페이로드)
//! ```

pub mod auth;
pub mod token;
