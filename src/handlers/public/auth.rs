// Session endpoints: register, login, logout, current user.
use axum::{extract::State, http::StatusCode, response::Json, Extension};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::Deserialize;

use crate::auth::{self, CurrentUser};
use crate::config;
use crate::error::{ApiError, FieldErrors};
use crate::models::User;
use crate::state::AppState;

/// Uniform message for unknown user and credential mismatch; the two cases
/// must not be distinguishable from the outside.
const BAD_CREDENTIALS: &str = "Invalid username or password";

const MIN_PASSWORD_LENGTH: usize = 8;

/// Registration and login payload. Extra fields in the request body, isAdmin
/// in particular, are ignored; there is no self-escalation path.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

fn validate_credentials(body: Credentials) -> Result<(String, String), ApiError> {
    let mut errors = FieldErrors::new();
    let username = errors.require_text("username", body.username);
    let password = errors.require_text("password", body.password);

    if let Some(username) = &username {
        if username.len() < 3 || username.len() > 100 {
            errors.add("username", "Must be between 3 and 100 characters");
        } else if username.chars().any(char::is_whitespace) {
            errors.add("username", "Must not contain whitespace");
        }
    }
    if let Some(password) = &password {
        if password.len() < MIN_PASSWORD_LENGTH {
            errors.add("password", "Must be at least 8 characters");
        }
    }

    errors.finish("Invalid credentials")?;
    Ok((username.unwrap_or_default(), password.unwrap_or_default()))
}

fn session_cookie(token: String) -> Cookie<'static> {
    let session = &config::config().session;
    Cookie::build((session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(session.secure_cookies)
        .same_site(SameSite::Lax)
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build((config::config().session.cookie_name.clone(), ""))
        .path("/")
        .build()
}

/// POST /api/register - create an account and log it in
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<serde_json::Value>,
) -> Result<(CookieJar, (StatusCode, Json<User>)), ApiError> {
    let body: Credentials =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let (username, password) = validate_credentials(body)?;
    let hash = auth::hash_password(&password)?;

    let user = state
        .store
        .users
        .insert_guarded(
            |existing| existing.username == username,
            |id| User {
                id,
                username: username.clone(),
                password: hash,
                // Registration never grants privileges, whatever the body said
                is_admin: false,
                created_at: Utc::now(),
            },
        )
        .ok_or_else(|| ApiError::conflict("Username already exists"))?;

    let token = state.sessions.create(user.id);
    tracing::info!(username = %user.username, "registered new account");

    Ok((
        jar.add(session_cookie(token)),
        (StatusCode::CREATED, Json(user)),
    ))
}

/// POST /api/login - authenticate and establish a session
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<serde_json::Value>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let body: Credentials =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let user = state
        .store
        .user_by_username(&username)
        .filter(|user| auth::verify_password(&password, &user.password))
        .ok_or_else(|| ApiError::unauthorized(BAD_CREDENTIALS))?;

    let token = state.sessions.create(user.id);
    tracing::info!(username = %user.username, "logged in");

    Ok((jar.add(session_cookie(token)), Json(user)))
}

/// POST /api/logout - destroy the session. Idempotent: logging out twice, or
/// with no session at all, succeeds the same way.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    if let Some(cookie) = jar.get(&config::config().session.cookie_name) {
        state.sessions.destroy(cookie.value());
    }
    (jar.remove(removal_cookie()), StatusCode::NO_CONTENT)
}

/// GET /api/user - the authenticated account, or 401
pub async fn current_user(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<User>, ApiError> {
    let principal = current
        .0
        .ok_or_else(|| ApiError::unauthorized("Not logged in"))?;
    state
        .store
        .users
        .get(principal.user_id)
        .map(Json)
        .ok_or_else(|| ApiError::unauthorized("Not logged in"))
}
