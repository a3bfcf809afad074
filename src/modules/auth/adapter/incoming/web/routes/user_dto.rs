use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::UserResult;

/// Public user representation returned by the auth and profile routes.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "Youssef El Amrani")]
    pub full_name: String,
    #[schema(example = "youssef@example.ma")]
    pub email: String,
    #[schema(example = "0612345678")]
    pub phone: Option<String>,
    #[schema(example = "Casablanca")]
    pub city: Option<String>,
    #[schema(example = "customer")]
    pub role: String,
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserResult> for UserResponse {
    fn from(user: UserResult) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            city: user.city,
            role: user.role.as_str().to_string(),
            avatar: user.avatar,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}
