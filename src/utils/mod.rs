//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 검증/정리, 스킬 분리, `ObjectId` 파싱
//! - [`avatar`] - 이메일 기반 아바타 URL 생성

pub mod string_utils;
pub mod avatar;
