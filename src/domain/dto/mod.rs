//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조를 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **명시적 스키마**: 연산마다 별도의 요청 타입을 두고 `validator` derive로 검증합니다.
//! - **내부 표현과 분리**: 엔티티의 `ObjectId`는 16진수 문자열로, BSON 날짜는
//!   RFC 3339 문자열로 변환되어 나갑니다.
//! - **민감 정보 차단**: 비밀번호 해시는 어떤 응답 타입에도 존재하지 않습니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/      # 회원가입, 로그인, 현재 사용자
//! ├── profiles/   # 프로필 upsert, 경력/학력, GitHub 저장소
//! └── posts/      # 게시물, 댓글
//! ```
//!
//! 요청 JSON 필드는 camelCase(`fieldOfStudy`, `githubUsername`)를 사용합니다.

pub mod users;
pub mod profiles;
pub mod posts;

use mongodb::bson::DateTime;

/// BSON 날짜를 RFC 3339 문자열로 변환합니다.
///
/// 표현 범위를 벗어난 값은 밀리초 타임스탬프 문자열로 대체합니다.
pub fn format_datetime(value: DateTime) -> String {
    value
        .try_to_rfc3339_string()
        .unwrap_or_else(|_| value.timestamp_millis().to_string())
}
