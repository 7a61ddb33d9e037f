use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::PgPool;
use tracing::{debug, instrument, trace};

use crate::{
    AppState,
    api::models::users::CurrentUser,
    auth::session,
    db::{errors::DbError, handlers::Users, models::users::UserCreateDBRequest},
    errors::{Error, Result},
};

/// Extract user from JWT session cookie if present and valid
/// Returns:
/// - None: No session cookie present
/// - Some(Ok(user)): Valid JWT found and verified
/// - Some(Err(error)): Cookie header present but unreadable
#[instrument(skip(parts, config))]
fn try_jwt_session_auth(parts: &Parts, config: &crate::config::Config) -> Option<Result<CurrentUser>> {
    let cookie_header = parts.headers.get(axum::http::header::COOKIE)?;

    let cookie_str = match cookie_header.to_str() {
        Ok(s) => s,
        Err(e) => {
            return Some(Err(Error::bad_request(format!("Invalid cookie header: {e}"))));
        }
    };
    let cookie_name = &config.auth.session.cookie_name;

    for cookie in cookie_str.split(';') {
        let cookie = cookie.trim();
        if let Some((name, value)) = cookie.split_once('=')
            && name == cookie_name
        {
            match session::verify_session_token(value, config) {
                Ok(user) => return Some(Ok(user)),
                // Expired/forged tokens are expected; keep scanning in case
                // another cookie with the same name verifies
                Err(_) => continue,
            }
        }
    }
    None
}

/// Extract user from proxy header if present and valid
/// Returns:
/// - None: No proxy header present
/// - Some(Ok(user)): Valid proxy header found and user authenticated
/// - Some(Err(error)): Proxy header present but user lookup/creation failed
#[instrument(skip(parts, config, db))]
async fn try_proxy_header_auth(parts: &Parts, config: &crate::config::Config, db: &PgPool) -> Option<Result<CurrentUser>> {
    let user_email = parts
        .headers
        .get(&config.auth.proxy_header.header_name)
        .and_then(|h| h.to_str().ok())?;

    let mut conn = match db.acquire().await {
        Ok(conn) => conn,
        Err(e) => return Some(Err(DbError::from(e).into())),
    };
    let mut user_repo = Users::new(&mut conn);

    match user_repo.get_by_email(user_email).await {
        Ok(Some(user)) => Some(Ok(CurrentUser::from(user))),
        Ok(None) => {
            if config.auth.proxy_header.auto_create_users {
                let create_request = UserCreateDBRequest {
                    email: user_email.to_string(),
                    first_name: None,
                    last_name: None,
                    auth_source: "proxy-header".to_string(),
                };

                match user_repo.create(&create_request).await {
                    Ok(new_user) => Some(Ok(CurrentUser::from(new_user))),
                    Err(e) => Some(Err(Error::Database(e))),
                }
            } else {
                None
            }
        }
        Err(e) => Some(Err(Error::Database(e))),
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    #[instrument(skip(parts, state))]
    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        // Each method returns Option<Result<CurrentUser>>:
        // - None means the auth method is not applicable (no credentials present)
        // - Some(Ok(user)) means successful authentication
        // - Some(Err(error)) means auth credentials were present but invalid
        //
        // Try each method in turn and return the first successful one; fail
        // only when every method was absent or failed.

        if state.config.secret_key.is_some() {
            match try_jwt_session_auth(parts, &state.config) {
                Some(Ok(user)) => {
                    debug!("Found JWT session authenticated user: {}", user.id);
                    return Ok(user);
                }
                Some(Err(e)) => {
                    trace!("JWT session authentication failed: {:?}", e);
                }
                None => {
                    trace!("No JWT session authentication attempted");
                }
            }
        }

        if state.config.auth.proxy_header.enabled {
            match try_proxy_header_auth(parts, &state.config, &state.db).await {
                Some(Ok(user)) => {
                    debug!("Found proxy header authenticated user: {}", user.id);
                    return Ok(user);
                }
                Some(Err(e)) => {
                    trace!("Proxy header authentication failed: {:?}", e);
                }
                None => {
                    trace!("No proxy header authentication attempted");
                }
            }
        }

        Err(Error::Unauthenticated { message: None })
    }
}

/// Optional authentication: `None` where `CurrentUser` would reject with 401.
///
/// Used by endpoints that also accept an anonymous `tempUserId` identity.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        match CurrentUser::from_request_parts(parts, state).await {
            Ok(user) => Ok(MaybeUser(Some(user))),
            Err(Error::Unauthenticated { .. }) => Ok(MaybeUser(None)),
            Err(other) => Err(other),
        }
    }
}
