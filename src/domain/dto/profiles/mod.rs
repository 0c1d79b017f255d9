//! # Profile Data Transfer Objects
//!
//! ```text
//! profiles/
//! ├── request.rs    # UpsertProfileRequest, ExperienceRequest, EducationRequest
//! └── response.rs   # ProfileResponse 및 포함 항목 응답
//! ```

pub mod request;
pub mod response;

pub use request::{EducationRequest, ExperienceRequest, GithubReposQuery, UpsertProfileRequest};
pub use response::{
    EducationLookupResponse, EducationResponse, ExperienceLookupResponse, ExperienceResponse,
    GithubRepoResponse, ProfileOwner, ProfileResponse,
};
