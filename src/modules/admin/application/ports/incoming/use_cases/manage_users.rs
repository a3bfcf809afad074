use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{AdminUserFilter, UserPatch};
use crate::auth::application::domain::entities::{is_valid_moroccan_phone, Role};
use crate::auth::application::ports::outgoing::UserResult;
use crate::shared::api::{PageRequest, Paginated};

use super::admin_error::{non_blank, AdminError, AdminInputError};

fn parse_role(value: Option<String>) -> Result<Option<Role>, AdminInputError> {
    match non_blank(value) {
        None => Ok(None),
        Some(r) => r
            .parse()
            .map(Some)
            .map_err(|_| AdminInputError::UnknownRole(r)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminUserListQuery {
    pub filter: AdminUserFilter,
    pub page: PageRequest,
}

impl AdminUserListQuery {
    pub fn new(
        page: Option<u64>,
        limit: Option<u64>,
        role: Option<String>,
        search: Option<String>,
    ) -> Result<Self, AdminInputError> {
        Ok(Self {
            filter: AdminUserFilter {
                role: parse_role(role.filter(|r| r != "all"))?,
                search: non_blank(search),
            },
            page: PageRequest::new(page, limit),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserPatchInput {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub role: Option<String>,
    pub is_verified: Option<bool>,
}

impl TryFrom<UserPatchInput> for UserPatch {
    type Error = AdminInputError;

    fn try_from(input: UserPatchInput) -> Result<Self, Self::Error> {
        let full_name = match input.full_name {
            Some(name) if name.trim().is_empty() => return Err(AdminInputError::EmptyFullName),
            other => non_blank(other),
        };

        let phone = non_blank(input.phone);
        if phone.as_deref().is_some_and(|p| !is_valid_moroccan_phone(p)) {
            return Err(AdminInputError::InvalidPhone);
        }

        Ok(UserPatch {
            full_name,
            phone,
            city: non_blank(input.city),
            role: parse_role(input.role)?,
            is_verified: input.is_verified,
        })
    }
}

#[async_trait]
pub trait ManageUsersUseCase: Send + Sync {
    async fn list(&self, query: AdminUserListQuery) -> Result<Paginated<UserResult>, AdminError>;

    async fn update(&self, user_id: Uuid, patch: UserPatch) -> Result<UserResult, AdminError>;

    async fn delete(&self, user_id: Uuid) -> Result<(), AdminError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_parses_role() {
        let q = AdminUserListQuery::new(None, None, Some("artisan".into()), Some("ali".into()))
            .unwrap();
        assert_eq!(q.filter.role, Some(Role::Artisan));
        assert_eq!(q.filter.search.as_deref(), Some("ali"));

        let err = AdminUserListQuery::new(None, None, Some("owner".into()), None).unwrap_err();
        assert_eq!(err, AdminInputError::UnknownRole("owner".into()));
    }

    #[test]
    fn patch_may_promote_and_verify() {
        let patch = UserPatch::try_from(UserPatchInput {
            role: Some("admin".into()),
            is_verified: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.role, Some(Role::Admin));
        assert_eq!(patch.is_verified, Some(true));
    }

    #[test]
    fn patch_rejects_blank_name_and_bad_phone() {
        let blank = UserPatch::try_from(UserPatchInput {
            full_name: Some("   ".into()),
            ..Default::default()
        });
        assert_eq!(blank.unwrap_err(), AdminInputError::EmptyFullName);

        let phone = UserPatch::try_from(UserPatchInput {
            phone: Some("12345".into()),
            ..Default::default()
        });
        assert_eq!(phone.unwrap_err(), AdminInputError::InvalidPhone);
    }
}
