//! Short-lived admin sessions.
//!
//! The login endpoint issues a random token instead of the client
//! re-sending raw Basic material on every write. Sessions live in
//! process memory only; expired entries are purged lazily on issue, so
//! no background task is needed.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::{distributions::Alphanumeric, Rng};

const TOKEN_LEN: usize = 48;

pub struct SessionStore {
    ttl: Duration,
    sessions: DashMap<String, DateTime<Utc>>,
}

pub struct SessionGrant {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionStore {
    pub fn new(ttl_minutes: u64) -> Self {
        Self {
            ttl: Duration::minutes(ttl_minutes as i64),
            sessions: DashMap::new(),
        }
    }

    /// Issue a fresh session token.
    pub fn issue(&self) -> SessionGrant {
        self.purge_expired();

        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        let expires_at = Utc::now() + self.ttl;
        self.sessions.insert(token.clone(), expires_at);

        SessionGrant { token, expires_at }
    }

    /// True if the token exists and has not expired.
    pub fn validate(&self, token: &str) -> bool {
        let expired = match self.sessions.get(token) {
            None => return false,
            Some(expires_at) => *expires_at <= Utc::now(),
        };
        if expired {
            self.sessions.remove(token);
            return false;
        }
        true
    }

    fn purge_expired(&self) {
        let now = Utc::now();
        self.sessions.retain(|_, expires_at| *expires_at > now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_validate() {
        let store = SessionStore::new(60);
        let grant = store.issue();
        assert_eq!(grant.token.len(), TOKEN_LEN);
        assert!(store.validate(&grant.token));
        assert!(!store.validate("unknown-token"));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let store = SessionStore::new(0);
        let grant = store.issue();
        assert!(!store.validate(&grant.token));
        // The expired entry was dropped on validation.
        assert!(store.sessions.is_empty());
    }

    #[test]
    fn test_issue_purges_expired_sessions() {
        let store = SessionStore::new(0);
        store.issue();
        store.issue();
        // Each issue call starts by purging, so dead tokens never pile up.
        assert!(store.sessions.len() <= 1);
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = SessionStore::new(60);
        let a = store.issue();
        let b = store.issue();
        assert_ne!(a.token, b.token);
    }
}
