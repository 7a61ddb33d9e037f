//! API request/response models for users.

use crate::db::models::users::UserDBResponse;
use crate::types::{OnboardingStatus, Plan, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The authenticated caller, as resolved from a session cookie or proxy
/// header. Carries just enough for authorization decisions; handlers that
/// need the full profile fetch it from the database.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUser {
    #[schema(value_type = String, format = "uuid")]
    pub id: UserId,
    pub email: String,
    pub plan: Plan,
}

/// Full profile as returned by `GET /user`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_url: Option<String>,
    pub plan: Plan,
    pub onboarding_status: OnboardingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update accepted by `PUT /user`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_url: Option<String>,
    pub onboarding_status: Option<OnboardingStatus>,
}

impl From<UserDBResponse> for CurrentUser {
    fn from(db: UserDBResponse) -> Self {
        Self {
            id: db.id,
            email: db.email,
            plan: db.plan,
        }
    }
}

impl From<UserDBResponse> for UserResponse {
    fn from(db: UserDBResponse) -> Self {
        Self {
            id: db.id,
            email: db.email,
            first_name: db.first_name,
            last_name: db.last_name,
            profile_url: db.profile_url,
            plan: db.plan,
            onboarding_status: db.onboarding_status,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
