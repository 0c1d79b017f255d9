//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 기반 요소입니다.
//!
//! - [`errors`] - `AppError`와 HTTP 에러 응답 변환
//! - [`registry`] - 시작 시 조립되는 서비스 묶음과 앱 데이터 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
