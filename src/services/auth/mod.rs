//! 인증 관련 서비스
//!
//! - [`token_service`] - JWT 신원 토큰 발급/검증, 요청에서 토큰 추출

pub mod token_service;

pub use token_service::*;
