use std::sync::Arc;

use crate::auth::session::SessionStore;
use crate::store::Store;

/// Shared application state: the entity store and the session store, each
/// with its own lifecycle. Cloning is cheap; both are behind Arcs.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(store: Store, sessions: SessionStore) -> Self {
        Self {
            store: Arc::new(store),
            sessions: Arc::new(sessions),
        }
    }
}
