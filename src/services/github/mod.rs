pub mod github_service;

pub use github_service::GithubService;
