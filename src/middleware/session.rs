use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::auth::{CurrentUser, Principal};
use crate::config;
use crate::state::AppState;

/// Session resolution middleware: turns the session cookie into a
/// `CurrentUser` extension on every request. Routes decide for themselves
/// what an absent principal means; this layer never rejects.
///
/// A session whose user record has been deleted resolves to no principal;
/// sessions are not cascaded on user deletion, they just stop resolving.
pub async fn resolve_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = jar
        .get(&config::config().session.cookie_name)
        .and_then(|cookie| state.sessions.resolve(cookie.value()))
        .and_then(|user_id| state.store.users.get(user_id))
        .map(|user| Principal {
            user_id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        });

    request.extensions_mut().insert(CurrentUser(principal));
    next.run(request).await
}
