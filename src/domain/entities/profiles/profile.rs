//! Profile Aggregate
//!
//! 사용자 한 명당 최대 하나 존재하는 프로필 문서와, 그 안에 포함된
//! 경력(`Experience`)/학력(`Education`) 목록을 정의합니다.
//!
//! 포함 목록은 항상 최신 항목이 앞에 오도록(head insert) 유지되며,
//! 각 항목은 생성 시 부여된 `ObjectId`로 삭제됩니다.

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, Bson, DateTime, Document};
use serde::{Deserialize, Serialize};

/// 소셜 링크 묶음
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// 경력 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// 학력 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// 프로필 애그리거트 루트
///
/// `user`와 `handle`은 각각 유니크 인덱스로 보호됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 소유 사용자 ID (1:1)
    pub user: ObjectId,
    /// 전역 유니크 핸들
    pub handle: String,
    pub status: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub created_at: DateTime,
}

impl Profile {
    /// 변경 사항을 초기값으로 사용하여 새 프로필을 만듭니다.
    ///
    /// 생성 경로에서는 `handle`, `status`가 검증 단계에서 이미 보장됩니다.
    pub fn create(user: ObjectId, changes: ProfileChanges) -> Self {
        let mut profile = Self {
            id: ObjectId::new(),
            user,
            handle: String::new(),
            status: String::new(),
            skills: Vec::new(),
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            created_at: DateTime::now(),
        };
        changes.apply(&mut profile);
        profile
    }

    pub fn find_experience(&self, id: &ObjectId) -> Option<&Experience> {
        self.experience.iter().find(|e| &e.id == id)
    }

    pub fn find_education(&self, id: &ObjectId) -> Option<&Education> {
        self.education.iter().find(|e| &e.id == id)
    }
}

/// 선택 필드 하나의 변경 내용
///
/// `None`은 변경 없음, `Some(None)`은 기존 값 삭제, `Some(Some(v))`는 덮어쓰기입니다.
pub type FieldChange = Option<Option<String>>;

/// 소셜 링크 변경 내용 (링크 단위)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocialLinkChanges {
    pub youtube: FieldChange,
    pub twitter: FieldChange,
    pub facebook: FieldChange,
    pub linkedin: FieldChange,
    pub instagram: FieldChange,
}

/// 프로필 부분 갱신 내용
///
/// `Some`인 필드만 변경됩니다. `skills`는 병합이 아니라 통째로 교체됩니다.
/// 소셜 링크는 링크 단위로 갱신됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub handle: Option<String>,
    pub status: Option<String>,
    pub skills: Option<Vec<String>>,
    pub company: FieldChange,
    pub website: FieldChange,
    pub location: FieldChange,
    pub bio: FieldChange,
    pub github_username: FieldChange,
    pub social: SocialLinkChanges,
}

impl ProfileChanges {
    /// 메모리 상의 프로필에 변경 사항을 적용합니다.
    pub fn apply(&self, profile: &mut Profile) {
        if let Some(handle) = &self.handle {
            profile.handle = handle.clone();
        }
        if let Some(status) = &self.status {
            profile.status = status.clone();
        }
        if let Some(skills) = &self.skills {
            profile.skills = skills.clone();
        }

        let optional_fields = [
            (&self.company, &mut profile.company),
            (&self.website, &mut profile.website),
            (&self.location, &mut profile.location),
            (&self.bio, &mut profile.bio),
            (&self.github_username, &mut profile.github_username),
            (&self.social.youtube, &mut profile.social.youtube),
            (&self.social.twitter, &mut profile.social.twitter),
            (&self.social.facebook, &mut profile.social.facebook),
            (&self.social.linkedin, &mut profile.social.linkedin),
            (&self.social.instagram, &mut profile.social.instagram),
        ];
        for (change, target) in optional_fields {
            if let Some(value) = change {
                *target = value.clone();
            }
        }
    }

    /// MongoDB `$set` 연산자에 넣을 문서를 만듭니다.
    ///
    /// 삭제된 선택 필드는 `null`로 설정됩니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();

        if let Some(handle) = &self.handle {
            set.insert("handle", handle.as_str());
        }
        if let Some(status) = &self.status {
            set.insert("status", status.as_str());
        }
        if let Some(skills) = &self.skills {
            set.insert("skills", skills.clone());
        }

        let optional_fields = [
            ("company", &self.company),
            ("website", &self.website),
            ("location", &self.location),
            ("bio", &self.bio),
            ("github_username", &self.github_username),
            ("social.youtube", &self.social.youtube),
            ("social.twitter", &self.social.twitter),
            ("social.facebook", &self.social.facebook),
            ("social.linkedin", &self.social.linkedin),
            ("social.instagram", &self.social.instagram),
        ];
        for (key, change) in optional_fields {
            match change {
                Some(Some(value)) => {
                    set.insert(key, value.as_str());
                }
                Some(None) => {
                    set.insert(key, Bson::Null);
                }
                None => {}
            }
        }

        set
    }

    pub fn is_empty(&self) -> bool {
        self.to_set_document().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes() -> ProfileChanges {
        ProfileChanges {
            handle: Some("abc".to_string()),
            status: Some("Developer".to_string()),
            skills: Some(vec!["rust".to_string(), "go".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_applies_initial_fields() {
        let user = ObjectId::new();
        let profile = Profile::create(user, changes());

        assert_eq!(profile.user, user);
        assert_eq!(profile.handle, "abc");
        assert_eq!(profile.skills, vec!["rust", "go"]);
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_apply_only_changes_supplied_fields() {
        let mut profile = Profile::create(ObjectId::new(), changes());
        profile.bio = Some("hello".to_string());

        let update = ProfileChanges {
            status: Some("Lead".to_string()),
            skills: Some(vec!["zig".to_string()]),
            ..Default::default()
        };
        update.apply(&mut profile);

        assert_eq!(profile.handle, "abc");
        assert_eq!(profile.status, "Lead");
        assert_eq!(profile.skills, vec!["zig"]);
        assert_eq!(profile.bio.as_deref(), Some("hello"));
    }

    #[test]
    fn test_set_document_uses_dotted_social_keys() {
        let update = ProfileChanges {
            social: SocialLinkChanges {
                twitter: Some(Some("https://twitter.com/abc".to_string())),
                ..Default::default()
            },
            ..Default::default()
        };
        let set = update.to_set_document();

        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("social.twitter").unwrap(), "https://twitter.com/abc");
        assert!(!update.is_empty());
        assert!(ProfileChanges::default().is_empty());
    }

    #[test]
    fn test_cleared_field_is_removed() {
        let mut profile = Profile::create(ObjectId::new(), changes());
        profile.bio = Some("hello".to_string());
        profile.website = Some("https://x.io".to_string());

        let update = ProfileChanges {
            bio: Some(None),
            ..Default::default()
        };
        update.apply(&mut profile);

        assert_eq!(profile.bio, None);
        assert_eq!(profile.website.as_deref(), Some("https://x.io"));

        let set = update.to_set_document();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("bio"), Some(&Bson::Null));
    }
}
