//! # GitHub 저장소 조회 서비스
//!
//! 프로필에 연결된 GitHub 사용자의 최근 저장소 목록을 GitHub REST API에서 가져옵니다.
//! 클라이언트 ID/시크릿이 설정되어 있으면 Basic 인증으로 요청 한도를 늘립니다.

use reqwest::StatusCode;

use crate::config::GithubConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::profiles::GithubRepoResponse;

pub const DEFAULT_REPO_LIMIT: u32 = 5;
const MAX_REPO_LIMIT: u32 = 100;
const USER_AGENT: &str = "social-feed-backend";

pub struct GithubService {
    client: reqwest::Client,
    api_base: String,
    credentials: Option<(String, String)>,
}

impl GithubService {
    pub fn new(api_base: String, client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            credentials: client_id.zip(client_secret),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            GithubConfig::api_base(),
            GithubConfig::client_id(),
            GithubConfig::client_secret(),
        )
    }

    /// 사용자의 최근 생성 저장소를 최대 `limit`개 조회합니다. `limit`은 1..=100으로 보정됩니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 잘못된 사용자 이름이거나 GitHub에 없는 사용자
    /// * `ExternalServiceError` - 네트워크 오류, 비정상 응답
    pub async fn recent_repos(&self, username: &str, limit: Option<u32>) -> AppResult<Vec<GithubRepoResponse>> {
        let username = username.trim();
        if !is_valid_username(username) {
            return Err(github_profile_not_found());
        }

        let url = self.repos_url(username, limit.unwrap_or(DEFAULT_REPO_LIMIT));
        let mut request = self.client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");

        if let Some((id, secret)) = &self.credentials {
            request = request.basic_auth(id, Some(secret));
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 요청 실패: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(github_profile_not_found());
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "GitHub 응답 오류 {}: {}", status, error_text
            )));
        }

        response
            .json::<Vec<GithubRepoResponse>>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 응답 파싱 실패: {}", e)))
    }

    fn repos_url(&self, username: &str, limit: u32) -> String {
        format!(
            "{}/users/{}/repos?per_page={}&sort=created",
            self.api_base,
            urlencoding::encode(username),
            limit.clamp(1, MAX_REPO_LIMIT)
        )
    }
}

/// GitHub 사용자 이름 규칙: 영문/숫자/하이픈, 최대 39자
fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 39
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn github_profile_not_found() -> AppError {
    AppError::NotFound("GitHub 프로필을 찾을 수 없습니다".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repos_url() {
        let github = GithubService::new("https://api.github.com/".to_string(), None, None);

        assert_eq!(
            github.repos_url("octocat", 5),
            "https://api.github.com/users/octocat/repos?per_page=5&sort=created"
        );
        assert!(github.repos_url("octocat", 0).contains("per_page=1&"));
        assert!(github.repos_url("octocat", 500).contains("per_page=100&"));
    }

    #[test]
    fn test_credentials_require_both_parts() {
        let github = GithubService::new("https://api.github.com".to_string(), Some("id".to_string()), None);
        assert!(github.credentials.is_none());
    }

    #[actix_web::test]
    async fn test_invalid_username_is_not_found() {
        let github = GithubService::new("http://127.0.0.1:9".to_string(), None, None);
        let too_long = "x".repeat(40);

        for username in ["", "../etc", "a b", too_long.as_str()] {
            assert!(matches!(
                github.recent_repos(username, None).await,
                Err(AppError::NotFound(_))
            ));
        }
    }
}
