//! # 프로필 서비스 구현
//!
//! 프로필 애그리거트의 생성/병합, 경력·학력 관리, 조회, 계정 삭제를 담당합니다.
//!
//! ## 핸들 유일성
//!
//! 핸들은 전체 프로필에서 유일합니다. 생성과 수정 모두 "다른 사용자의 프로필이
//! 이 핸들을 쓰고 있는가"를 확인하며, 자기 자신의 프로필과는 비교하지 않습니다.
//! 확인 이후의 경쟁 상태는 저장소의 유니크 제약이 `ConflictError`로 막습니다.
//!
//! ## 계정 삭제
//!
//! 프로필 삭제 후 사용자 삭제 순서로 진행합니다. 두 번째 단계가 실패하면
//! 부분 삭제 상태를 로그에 남기고 `InternalError`를 반환합니다.
//! 작성한 게시물은 삭제하지 않습니다.

use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::profiles::{
    EducationRequest, EducationResponse, ExperienceRequest, ExperienceResponse, ProfileResponse,
    UpsertProfileRequest,
};
use crate::domain::entities::profiles::{Profile, ProfileChanges};
use crate::domain::entities::users::User;
use crate::repositories::profiles::ProfileStore;
use crate::repositories::users::UserStore;

pub const PROFILE_NOT_FOUND: &str = "이 사용자의 프로필이 없습니다";
const HANDLE_TAKEN: &str = "이미 사용 중인 핸들입니다";

pub struct ProfileService {
    profiles: Arc<dyn ProfileStore>,
    users: Arc<dyn UserStore>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileStore>, users: Arc<dyn UserStore>) -> Self {
        Self { profiles, users }
    }

    /// 프로필을 생성하거나 전달된 필드만 병합합니다.
    pub async fn upsert(&self, user_id: &ObjectId, request: UpsertProfileRequest) -> AppResult<ProfileResponse> {
        let changes = request.into_changes();
        self.ensure_handle_available(user_id, &changes).await?;

        let profile = match self.profiles.find_by_user(user_id).await? {
            Some(_) => self
                .profiles
                .update_fields(user_id, &changes)
                .await?
                .ok_or_else(profile_not_found)?,
            None => {
                let profile = Profile::create(*user_id, changes);
                self.profiles.insert(&profile).await?;
                log::info!("프로필 생성: {} (user {})", profile.handle, user_id);
                profile
            }
        };

        self.with_owner(profile).await
    }

    /// 경력을 목록 맨 앞에 추가합니다.
    pub async fn add_experience(&self, user_id: &ObjectId, request: ExperienceRequest) -> AppResult<ProfileResponse> {
        let entry = request
            .into_entry()
            .ok_or_else(|| AppError::ValidationError("시작일은 필수입니다".to_string()))?;

        let profile = self
            .profiles
            .push_experience(user_id, &entry)
            .await?
            .ok_or_else(profile_not_found)?;

        self.with_owner(profile).await
    }

    /// 학력을 목록 맨 앞에 추가합니다.
    pub async fn add_education(&self, user_id: &ObjectId, request: EducationRequest) -> AppResult<ProfileResponse> {
        let entry = request
            .into_entry()
            .ok_or_else(|| AppError::ValidationError("시작일은 필수입니다".to_string()))?;

        let profile = self
            .profiles
            .push_education(user_id, &entry)
            .await?
            .ok_or_else(profile_not_found)?;

        self.with_owner(profile).await
    }

    pub async fn get_experience(&self, user_id: &ObjectId, entry_id: &ObjectId) -> AppResult<Option<ExperienceResponse>> {
        let profile = self.own_profile(user_id).await?;
        Ok(profile.find_experience(entry_id).cloned().map(Into::into))
    }

    pub async fn get_education(&self, user_id: &ObjectId, entry_id: &ObjectId) -> AppResult<Option<EducationResponse>> {
        let profile = self.own_profile(user_id).await?;
        Ok(profile.find_education(entry_id).cloned().map(Into::into))
    }

    /// 경력 항목 제거. 없는 ID는 변경 없이 성공합니다.
    pub async fn remove_experience(&self, user_id: &ObjectId, entry_id: &ObjectId) -> AppResult<ProfileResponse> {
        let profile = self
            .profiles
            .pull_experience(user_id, entry_id)
            .await?
            .ok_or_else(profile_not_found)?;

        self.with_owner(profile).await
    }

    /// 학력 항목 제거. 없는 ID는 변경 없이 성공합니다.
    pub async fn remove_education(&self, user_id: &ObjectId, entry_id: &ObjectId) -> AppResult<ProfileResponse> {
        let profile = self
            .profiles
            .pull_education(user_id, entry_id)
            .await?
            .ok_or_else(profile_not_found)?;

        self.with_owner(profile).await
    }

    /// 사용자 ID로 프로필 조회 (본인 및 공개 조회 공용)
    pub async fn get_by_user(&self, user_id: &ObjectId) -> AppResult<ProfileResponse> {
        let profile = self.own_profile(user_id).await?;
        self.with_owner(profile).await
    }

    /// 모든 프로필. 하나도 없으면 `NotFound`
    pub async fn list_all(&self) -> AppResult<Vec<ProfileResponse>> {
        let profiles = self.profiles.list_all().await?;
        if profiles.is_empty() {
            return Err(AppError::NotFound("등록된 프로필이 없습니다".to_string()));
        }

        let owner_ids: Vec<ObjectId> = profiles.iter().map(|p| p.user).collect();
        let owners: HashMap<ObjectId, User> = self
            .users
            .find_by_ids(&owner_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let owner = owners.get(&profile.user);
                ProfileResponse::new(profile, owner)
            })
            .collect())
    }

    /// 프로필과 계정을 순서대로 삭제합니다.
    pub async fn delete_own(&self, user_id: &ObjectId) -> AppResult<()> {
        self.profiles.delete_by_user(user_id).await?;

        match self.users.delete(user_id).await {
            Ok(_) => {
                log::info!("계정 삭제 완료: {}", user_id);
                Ok(())
            }
            Err(e) => {
                log::error!("부분 삭제: 프로필은 삭제되었으나 사용자 {} 삭제 실패: {}", user_id, e);
                Err(AppError::InternalError(format!(
                    "프로필 삭제 후 사용자 {} 삭제 실패: {}",
                    user_id, e
                )))
            }
        }
    }

    /// 다른 사용자의 프로필이 이 핸들을 쓰고 있으면 `ConflictError`
    async fn ensure_handle_available(&self, user_id: &ObjectId, changes: &ProfileChanges) -> AppResult<()> {
        let Some(handle) = &changes.handle else {
            return Ok(());
        };

        match self.profiles.find_by_handle(handle).await? {
            Some(existing) if &existing.user != user_id => {
                log::warn!("핸들 충돌: {} (요청 user {})", handle, user_id);
                Err(AppError::ConflictError(HANDLE_TAKEN.to_string()))
            }
            _ => Ok(()),
        }
    }

    async fn own_profile(&self, user_id: &ObjectId) -> AppResult<Profile> {
        self.profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(profile_not_found)
    }

    async fn with_owner(&self, profile: Profile) -> AppResult<ProfileResponse> {
        let owner = self.users.find_by_id(&profile.user).await?;
        Ok(ProfileResponse::new(profile, owner.as_ref()))
    }
}

fn profile_not_found() -> AppError {
    AppError::NotFound(PROFILE_NOT_FOUND.to_string())
}
