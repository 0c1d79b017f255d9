//! 이메일 기반 아바타 URL
//!
//! Gravatar의 SHA-256 주소 형식을 사용합니다. 이메일은 trim + 소문자로
//! 정규화한 뒤 해시합니다.

use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// 이메일에서 아바타 URL을 만듭니다.
///
/// 크기 200px, PG 등급, 등록된 이미지가 없으면 기본 실루엣(`mm`)입니다.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());

    let params = [("s", "200"), ("r", "pg"), ("d", "mm")];
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}/{:x}?{}", GRAVATAR_BASE, digest, query)
}
