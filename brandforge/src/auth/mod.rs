//! Authentication and identity resolution.
//!
//! Two credential sources are supported, tried in order by the
//! [`CurrentUser`](crate::api::models::users::CurrentUser) extractor:
//!
//! 1. JWT session cookie ([`session`]) - native browser sessions
//! 2. Trusted proxy header ([`current_user`]) - SSO deployments, with
//!    optional auto-creation of unknown users
//!
//! Several endpoints also accept an anonymous identity: a client-generated
//! `tempUserId` UUID supplied in the request body. [`RequestIdentity`]
//! captures the resolved "user or temp id" pair for those flows.

pub mod current_user;
pub mod session;

use uuid::Uuid;

use crate::api::models::users::CurrentUser;
use crate::errors::{Error, Result};
use crate::types::UserId;

/// The identity a generation request runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestIdentity {
    User(UserId),
    Temp(Uuid),
}

impl RequestIdentity {
    /// Resolve an identity from an optional session and an optional
    /// body-supplied temp id. An authenticated session always wins.
    pub fn resolve(user: Option<&CurrentUser>, temp_user_id: Option<Uuid>) -> Result<Self> {
        match (user, temp_user_id) {
            (Some(user), _) => Ok(RequestIdentity::User(user.id)),
            (None, Some(temp)) => Ok(RequestIdentity::Temp(temp)),
            (None, None) => Err(Error::Unauthenticated {
                message: Some("Sign in or supply a tempUserId".to_string()),
            }),
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            RequestIdentity::User(id) => Some(*id),
            RequestIdentity::Temp(_) => None,
        }
    }

    pub fn temp_user_id(&self) -> Option<Uuid> {
        match self {
            RequestIdentity::User(_) => None,
            RequestIdentity::Temp(id) => Some(*id),
        }
    }
}
