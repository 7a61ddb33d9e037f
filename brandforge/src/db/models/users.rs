//! Database models for users.

use crate::types::{OnboardingStatus, Plan, UserId};
use chrono::{DateTime, Utc};

/// Database request for creating a new user
#[derive(Debug, Clone)]
pub struct UserCreateDBRequest {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub auth_source: String,
}

/// Database request for updating a user's profile
///
/// `None` fields are left unchanged (COALESCE semantics).
#[derive(Debug, Clone, Default)]
pub struct UserUpdateDBRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_url: Option<String>,
    pub onboarding_status: Option<OnboardingStatus>,
}

/// Database response for a user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserDBResponse {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_url: Option<String>,
    pub plan: Plan,
    pub onboarding_status: OnboardingStatus,
    pub auth_source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
