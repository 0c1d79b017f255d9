//! # User Data Transfer Objects
//!
//! 계정 생성, 로그인, 현재 사용자 조회 API의 요청/응답 구조입니다.
//!
//! ```text
//! users/
//! ├── request.rs    # RegisterRequest, LoginRequest
//! └── response.rs   # UserResponse, TokenResponse, SuccessResponse
//! ```

pub mod request;
pub mod response;

pub use request::{LoginRequest, RegisterRequest};
pub use response::{SuccessResponse, TokenResponse, UserResponse};
