//! # 문자열 유틸리티
//!
//! 요청 값 정리, 스킬 목록 분리, 경로 파라미터의 `ObjectId` 변환 등
//! 핸들러와 서비스에서 공통으로 쓰는 함수들입니다.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  hi  ", "text").unwrap(), "hi");
/// assert!(validate_required_string("   ", "text").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 쉼표로 구분된 스킬 문자열을 순서가 유지된 목록으로 분리합니다.
///
/// 각 항목은 trim되고 빈 항목은 버려집니다.
///
/// ```rust,ignore
/// assert_eq!(split_skills("rust, go,,  ts "), vec!["rust", "go", "ts"]);
/// ```
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// 이메일을 비교 가능한 형태(trim + 소문자)로 정규화합니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 경로 파라미터를 `ObjectId`로 변환합니다.
///
/// 형식이 잘못된 ID는 존재하지 않는 리소스와 같게 취급하여
/// 주어진 메시지의 `NotFound`를 반환합니다.
pub fn parse_object_id(raw: &str, not_found_message: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw.trim())
        .map_err(|_| AppError::NotFound(not_found_message.to_string()))
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용하며,
/// 빈 문자열이나 공백만 있는 값은 `None`이 됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 부분 갱신용 선택 필드 deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_field_change")]`와 함께 사용합니다.
/// 키가 없으면 `None`(변경 없음), 빈 문자열/공백/`null`이면 `Some(None)`(삭제),
/// 그 외에는 trim된 값이 `Some(Some(..))`로 들어갑니다.
pub fn deserialize_field_change<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_optional_string(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "text").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "text").unwrap(), "World");

        assert!(validate_required_string("", "text").is_err());
        assert!(validate_required_string("   ", "text").is_err());
        assert!(validate_required_string("\t\n", "text").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_split_skills() {
        assert_eq!(split_skills("rust, go,,  ts "), vec!["rust", "go", "ts"]);
        assert_eq!(split_skills("HTML"), vec!["HTML"]);
        assert!(split_skills(" , ,").is_empty());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex(), "없음").unwrap(), id);

        match parse_object_id("not-an-id", "게시물을 찾을 수 없습니다") {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "게시물을 찾을 수 없습니다"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("안녕하세요".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_deserialize_field_change() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_field_change")]
            field: Option<Option<String>>,
        }

        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.field, None);

        let result: TestStruct = serde_json::from_str(r#"{"field": "  "}"#).unwrap();
        assert_eq!(result.field, Some(None));

        let result: TestStruct = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(result.field, Some(None));

        let result: TestStruct = serde_json::from_str(r#"{"field": " go "}"#).unwrap();
        assert_eq!(result.field, Some(Some("go".to_string())));
    }
}
