use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{AdminArtisanFilter, AdminArtisanRow};
use crate::artisan::application::domain::entities::ApprovalStatus;
use crate::artisan::application::ports::outgoing::UpdateArtisanData;
use crate::shared::api::{PageRequest, Paginated};

use super::admin_error::{non_blank, AdminError, AdminInputError};

#[derive(Debug, Clone, PartialEq)]
pub struct AdminArtisanListQuery {
    pub filter: AdminArtisanFilter,
    pub page: PageRequest,
}

impl AdminArtisanListQuery {
    pub fn new(
        page: Option<u64>,
        limit: Option<u64>,
        status: Option<String>,
        search: Option<String>,
    ) -> Result<Self, AdminInputError> {
        let status = match non_blank(status) {
            None => None,
            Some(s) if s == "all" => None,
            Some(s) => Some(
                ApprovalStatus::parse(&s).ok_or(AdminInputError::UnknownApprovalStatus(s))?,
            ),
        };

        Ok(Self {
            filter: AdminArtisanFilter {
                status,
                search: non_blank(search),
            },
            page: PageRequest::new(page, limit),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArtisanPatchInput {
    pub approval_status: Option<String>,
    pub is_available: Option<bool>,
    pub bio: Option<String>,
    pub experience: Option<i32>,
    pub response_time: Option<String>,
}

impl TryFrom<ArtisanPatchInput> for UpdateArtisanData {
    type Error = AdminInputError;

    fn try_from(input: ArtisanPatchInput) -> Result<Self, Self::Error> {
        let approval_status = match non_blank(input.approval_status) {
            None => None,
            Some(s) => Some(
                ApprovalStatus::parse(&s).ok_or(AdminInputError::UnknownApprovalStatus(s))?,
            ),
        };

        if input.experience.is_some_and(|e| e < 0) {
            return Err(AdminInputError::NegativeExperience);
        }

        Ok(UpdateArtisanData {
            bio: input.bio,
            experience: input.experience,
            is_available: input.is_available,
            response_time: non_blank(input.response_time),
            approval_status,
            ..Default::default()
        })
    }
}

#[async_trait]
pub trait ManageArtisansUseCase: Send + Sync {
    async fn list(
        &self,
        query: AdminArtisanListQuery,
    ) -> Result<Paginated<AdminArtisanRow>, AdminError>;

    async fn update(
        &self,
        artisan_id: Uuid,
        data: UpdateArtisanData,
    ) -> Result<AdminArtisanRow, AdminError>;

    async fn delete(&self, artisan_id: Uuid) -> Result<(), AdminError>;
}
