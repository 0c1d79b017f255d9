//! 프로필 요청 DTO

use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::profiles::{Education, Experience, FieldChange, ProfileChanges, SocialLinkChanges};
use crate::utils::string_utils::{
    clean_optional_string, deserialize_field_change, deserialize_optional_string, split_skills,
};

/// 프로필 생성/수정 요청 DTO
///
/// `handle`, `status`, `skills`는 항상 필요합니다. 나머지 필드는 전달된 경우에만
/// 기존 값을 덮어쓰며, 빈 문자열이나 `null`을 보내면 값이 삭제됩니다.
/// `skills`는 쉼표로 구분된 문자열입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    #[validate(
        custom(function = "validate_not_blank", message = "핸들은 필수입니다"),
        length(max = 40, message = "핸들은 40자 이하여야 합니다")
    )]
    #[serde(default)]
    pub handle: String,

    #[validate(custom(function = "validate_not_blank", message = "상태는 필수입니다"))]
    #[serde(default)]
    pub status: String,

    #[validate(custom(function = "validate_not_blank", message = "스킬은 필수입니다"))]
    #[serde(default)]
    pub skills: String,

    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub company: FieldChange,
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub website: FieldChange,
    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub location: FieldChange,
    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub bio: FieldChange,
    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub github_username: FieldChange,

    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub youtube: FieldChange,
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub twitter: FieldChange,
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub facebook: FieldChange,
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub linkedin: FieldChange,
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    #[serde(default, deserialize_with = "deserialize_field_change")]
    pub instagram: FieldChange,
}

impl UpsertProfileRequest {
    /// 검증을 통과한 요청을 부분 갱신 내용으로 변환합니다.
    pub fn into_changes(self) -> ProfileChanges {
        ProfileChanges {
            handle: Some(self.handle.trim().to_string()),
            status: Some(self.status.trim().to_string()),
            skills: Some(split_skills(&self.skills)),
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            github_username: self.github_username,
            social: SocialLinkChanges {
                youtube: self.youtube,
                twitter: self.twitter,
                facebook: self.facebook,
                linkedin: self.linkedin,
                instagram: self.instagram,
            },
        }
    }
}

/// 경력 추가 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequest {
    #[validate(custom(function = "validate_not_blank", message = "직함은 필수입니다"))]
    #[serde(default)]
    pub title: String,

    #[validate(custom(function = "validate_not_blank", message = "회사는 필수입니다"))]
    #[serde(default)]
    pub company: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,

    #[validate(required(message = "시작일은 필수입니다"))]
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub from: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl ExperienceRequest {
    /// 검증을 통과한 요청을 새 ID가 부여된 경력 항목으로 변환합니다.
    ///
    /// 검증 전에 호출되어 `from`이 비어 있으면 `None`을 반환합니다.
    pub fn into_entry(self) -> Option<Experience> {
        Some(Experience {
            id: ObjectId::new(),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location,
            from: self.from?,
            to: if self.current { None } else { self.to },
            current: self.current,
            description: self.description,
        })
    }
}

/// 학력 추가 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EducationRequest {
    #[validate(custom(function = "validate_not_blank", message = "학교는 필수입니다"))]
    #[serde(default)]
    pub school: String,

    #[validate(custom(function = "validate_not_blank", message = "학위는 필수입니다"))]
    #[serde(default)]
    pub degree: String,

    #[validate(custom(function = "validate_not_blank", message = "전공은 필수입니다"))]
    #[serde(default)]
    pub field_of_study: String,

    #[validate(required(message = "시작일은 필수입니다"))]
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub from: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl EducationRequest {
    /// 검증을 통과한 요청을 새 ID가 부여된 학력 항목으로 변환합니다.
    pub fn into_entry(self) -> Option<Education> {
        Some(Education {
            id: ObjectId::new(),
            school: self.school.trim().to_string(),
            degree: self.degree.trim().to_string(),
            field_of_study: self.field_of_study.trim().to_string(),
            from: self.from?,
            to: if self.current { None } else { self.to },
            current: self.current,
            description: self.description,
        })
    }
}

/// GitHub 저장소 조회 쿼리
#[derive(Debug, Clone, Deserialize)]
pub struct GithubReposQuery {
    pub limit: Option<u32>,
}

/// `YYYY-MM-DD` 또는 RFC 3339 타임스탬프를 날짜로 읽습니다.
///
/// 타임스탬프는 UTC 기준 날짜로 변환되고, 빈 값과 `null`은 `None`이 됩니다.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = clean_optional_string(Option::<String>::deserialize(deserializer)?) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(&raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("날짜 형식이 올바르지 않습니다: {}", raw)))
}

/// 공백만 있는 문자열을 거부합니다.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_request_requires_handle_status_skills() {
        let request: UpsertProfileRequest = serde_json::from_str(r#"{"handle":"  "}"#).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("handle"));
        assert!(fields.contains_key("status"));
        assert!(fields.contains_key("skills"));
        assert_eq!(
            fields["handle"][0].message.as_deref(),
            Some("핸들은 필수입니다")
        );
    }

    #[test]
    fn test_upsert_request_into_changes() {
        let request: UpsertProfileRequest = serde_json::from_str(
            r#"{
                "handle": " abc ",
                "status": "Developer",
                "skills": "rust, go,, ts",
                "bio": "   ",
                "githubUsername": "octocat",
                "twitter": "https://twitter.com/abc"
            }"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let changes = request.into_changes();
        assert_eq!(changes.handle.as_deref(), Some("abc"));
        assert_eq!(changes.skills, Some(vec!["rust".to_string(), "go".to_string(), "ts".to_string()]));
        assert_eq!(changes.bio, Some(None));
        assert_eq!(changes.company, None);
        assert_eq!(changes.github_username, Some(Some("octocat".to_string())));
        assert_eq!(changes.social.twitter, Some(Some("https://twitter.com/abc".to_string())));
    }

    #[test]
    fn test_upsert_request_allows_clearing_links() {
        let request: UpsertProfileRequest = serde_json::from_str(
            r#"{"handle":"abc","status":"Dev","skills":"rust","website":"","youtube":null}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let changes = request.into_changes();
        assert_eq!(changes.website, Some(None));
        assert_eq!(changes.social.youtube, Some(None));
        assert_eq!(changes.social.twitter, None);
    }

    #[test]
    fn test_upsert_request_rejects_bad_social_url() {
        let request: UpsertProfileRequest = serde_json::from_str(
            r#"{"handle":"abc","status":"Dev","skills":"rust","youtube":"not a url"}"#,
        )
        .unwrap();
        assert!(request.validate().unwrap_err().field_errors().contains_key("youtube"));
    }

    #[test]
    fn test_experience_request_validation() {
        let request: ExperienceRequest =
            serde_json::from_str(r#"{"title":"Engineer","company":""}"#).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("company"));
        assert!(fields.contains_key("from"));
        assert!(!fields.contains_key("title"));
    }

    #[test]
    fn test_current_experience_drops_end_date() {
        let request: ExperienceRequest = serde_json::from_str(
            r#"{"title":"Engineer","company":"Acme","from":"2020-01-01","to":"2021-01-01","current":true}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let entry = request.into_entry().unwrap();
        assert_eq!(entry.from, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(entry.to, None);
        assert!(entry.current);
    }

    #[test]
    fn test_education_request_uses_camel_case() {
        let request: EducationRequest = serde_json::from_str(
            r#"{"school":"MIT","degree":"BS","fieldOfStudy":"CS","from":"2015-09-01"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.into_entry().unwrap().field_of_study, "CS");
    }

    #[test]
    fn test_dates_accept_rfc3339_timestamps() {
        let request: EducationRequest = serde_json::from_str(
            r#"{"school":"MIT","degree":"BS","fieldOfStudy":"CS","from":"2015-09-01T00:00:00.000Z","to":"2019-06-30T15:00:00+09:00"}"#,
        )
        .unwrap();
        let entry = request.into_entry().unwrap();

        assert_eq!(entry.from, NaiveDate::from_ymd_opt(2015, 9, 1).unwrap());
        assert_eq!(entry.to, NaiveDate::from_ymd_opt(2019, 6, 30));

        assert!(serde_json::from_str::<ExperienceRequest>(
            r#"{"title":"Engineer","company":"Acme","from":"last year"}"#
        )
        .is_err());
    }

    #[test]
    fn test_github_limit_above_max_still_parses() {
        let query = actix_web::web::Query::<GithubReposQuery>::from_query("limit=500").unwrap();
        assert_eq!(query.limit, Some(500));

        let query = actix_web::web::Query::<GithubReposQuery>::from_query("").unwrap();
        assert_eq!(query.limit, None);
    }
}
