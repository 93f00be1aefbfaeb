//! Opaque-token sessions backed by an expiring in-process store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::{debug, info};
use uuid::Uuid;

/// Default session lifetime: 24 hours, absolute from issuance.
pub const SESSION_TTL_SECS: u64 = 86400;

struct SessionEntry {
    user_id: i64,
    expires_at: Instant,
}

/// Expiring key-value store mapping session tokens to user ids.
///
/// Expiry is lazy: an entry past its deadline is treated as absent and
/// removed the next time it is looked up. Tokens are opaque UUIDs and
/// carry no user information themselves.
#[derive(Default)]
struct TokenStore {
    entries: HashMap<String, SessionEntry>,
}

impl TokenStore {
    fn insert(&mut self, token: String, user_id: i64, ttl: Duration) {
        self.entries.insert(
            token,
            SessionEntry {
                user_id,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    fn get(&mut self, token: &str) -> Option<i64> {
        match self.entries.get(token) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.user_id),
            Some(_) => {
                self.entries.remove(token);
                None
            }
            None => None,
        }
    }

    fn remove(&mut self, token: &str) -> bool {
        self.entries.remove(token).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Manages session issuance, validation, and revocation.
pub struct SessionManager {
    store: Mutex<TokenStore>,
    ttl: Duration,
}

impl SessionManager {
    /// Create a manager with the default 24-hour session lifetime.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(SESSION_TTL_SECS))
    }

    /// Create a manager with a custom session lifetime.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            store: Mutex::new(TokenStore::default()),
            ttl,
        }
    }

    /// Issue a fresh session token for a user.
    ///
    /// Each call produces a new token; earlier tokens for the same user
    /// stay valid until they expire or are revoked.
    pub fn issue(&self, user_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        self.store
            .lock()
            .unwrap()
            .insert(token.clone(), user_id, self.ttl);
        info!("Issued session for user {}", user_id);
        token
    }

    /// Resolve a token to its user id, if the session is still live.
    pub fn validate(&self, token: &str) -> Option<i64> {
        self.store.lock().unwrap().get(token)
    }

    /// Revoke a session. Returns false when the token was unknown or
    /// already expired.
    pub fn revoke(&self, token: &str) -> bool {
        let removed = self.store.lock().unwrap().remove(token);
        if removed {
            debug!("Revoked session token");
        }
        removed
    }

    /// Number of entries currently held, expired stragglers included.
    pub fn session_count(&self) -> usize {
        self.store.lock().unwrap().len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
