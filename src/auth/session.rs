use std::collections::HashMap;
use std::sync::RwLock;

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Duration, Utc};
use rand::{thread_rng, Rng};

/// Server-side session records: opaque token -> user id, with a sliding
/// expiry window. Destruction is terminal; there is no suspended state.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
    ttl: Duration,
}

#[derive(Debug, Clone)]
struct SessionRecord {
    user_id: i32,
    expires_at: DateTime<Utc>,
}

impl SessionStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Create a session for a user and return its token.
    pub fn create(&self, user_id: i32) -> String {
        let token = generate_token();
        let record = SessionRecord {
            user_id,
            expires_at: Utc::now() + self.ttl,
        };
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(token.clone(), record);
        token
    }

    /// Resolve a token to its user id, refreshing the sliding expiry.
    /// Expired records are dropped on sight.
    pub fn resolve(&self, token: &str) -> Option<i32> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let now = Utc::now();
        match sessions.get_mut(token) {
            Some(record) if record.expires_at > now => {
                record.expires_at = now + self.ttl;
                Some(record.user_id)
            }
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Destroy a session. Destroying a token twice, or one that never
    /// existed, is not an error.
    pub fn destroy(&self, token: &str) {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(token);
    }

    pub fn len(&self) -> usize {
        self.sessions.read().expect("session lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 256-bit random identifier; not derivable from the user id or the clock.
fn generate_token() -> String {
    let mut token = [0u8; 32];
    thread_rng().fill(&mut token);
    general_purpose::URL_SAFE_NO_PAD.encode(token)
}
