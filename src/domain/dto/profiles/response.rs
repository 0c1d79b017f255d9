//! 프로필 응답 DTO

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dto::format_datetime;
use crate::domain::entities::profiles::{Education, Experience, Profile, SocialLinks};
use crate::domain::entities::users::User;

/// 프로필 소유자 요약 (users 컬렉션 조회 결과)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOwner {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<Experience> for ExperienceResponse {
    fn from(entry: Experience) -> Self {
        Self {
            id: entry.id.to_hex(),
            title: entry.title,
            company: entry.company,
            location: entry.location,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationResponse {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<Education> for EducationResponse {
    fn from(entry: Education) -> Self {
        Self {
            id: entry.id.to_hex(),
            school: entry.school,
            degree: entry.degree,
            field_of_study: entry.field_of_study,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

/// 프로필 응답 DTO
///
/// `user`에는 소유자의 이름과 아바타가 채워집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub user: ProfileOwner,
    pub handle: String,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub created_at: String,
}

impl ProfileResponse {
    /// 프로필과 (조회된 경우) 소유자 정보를 합쳐 응답을 만듭니다.
    pub fn new(profile: Profile, owner: Option<&User>) -> Self {
        let user = ProfileOwner {
            id: profile.user.to_hex(),
            name: owner.map(|u| u.name.clone()),
            avatar: owner.map(|u| u.avatar.clone()),
        };

        Self {
            id: profile.id.to_hex(),
            user,
            handle: profile.handle,
            status: profile.status,
            skills: profile.skills,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            github_username: profile.github_username,
            social: profile.social,
            experience: profile.experience.into_iter().map(Into::into).collect(),
            education: profile.education.into_iter().map(Into::into).collect(),
            created_at: format_datetime(profile.created_at),
        }
    }
}

/// 단일 경력 조회 응답 (`experience`가 없으면 `null`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceLookupResponse {
    pub success: bool,
    pub experience: Option<ExperienceResponse>,
}

/// 단일 학력 조회 응답 (`education`이 없으면 `null`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationLookupResponse {
    pub success: bool,
    pub education: Option<EducationResponse>,
}

/// GitHub 저장소 요약
///
/// GitHub API 응답 필드명을 그대로 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepoResponse {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::profiles::ProfileChanges;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_profile_response_populates_owner() {
        let owner = User::new(
            "Alice".to_string(),
            "a@x.io".to_string(),
            "hash".to_string(),
            "https://www.gravatar.com/avatar/abc".to_string(),
        );
        let mut profile = Profile::create(
            owner.id,
            ProfileChanges {
                handle: Some("abc".to_string()),
                status: Some("Developer".to_string()),
                skills: Some(vec!["rust".to_string()]),
                github_username: Some(Some("octocat".to_string())),
                ..Default::default()
            },
        );
        profile.experience.push(Experience {
            id: ObjectId::new(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        });

        let json = serde_json::to_value(ProfileResponse::new(profile, Some(&owner))).unwrap();

        assert_eq!(json["user"]["id"], owner.id_string());
        assert_eq!(json["user"]["name"], "Alice");
        assert_eq!(json["githubUsername"], "octocat");
        assert_eq!(json["experience"][0]["from"], "2020-01-01");
        assert!(json["experience"][0]["id"].is_string());
    }
}
