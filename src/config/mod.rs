//! 애플리케이션 설정 모듈
//!
//! 모든 설정은 환경 변수에서 읽어옵니다. `main`에서 `PROFILE`에 맞는 `.env` 파일을
//! 먼저 로드한 뒤, 각 설정 구조체의 연관 함수로 값을 조회합니다.
//!
//! - [`auth_config`] - JWT 서명/만료, 토큰 전달 방식
//! - [`data_config`] - 실행 환경, 저장소, bcrypt, 서버, CORS, GitHub

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
