//! Server-side sessions keyed by an opaque cookie value.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use uuid::Uuid;

/// Opaque session identifier carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
}

#[async_trait]
pub trait SessionStore: Send + Sync + fmt::Debug {
    async fn create(&self, user_id: i64) -> SessionId;
    async fn get(&self, id: &SessionId) -> Option<Session>;
    async fn destroy(&self, id: &SessionId);
}

/// In-process session store. Entries expire `ttl` after creation.
pub struct MemorySessionStore {
    cache: Cache<SessionId, Session>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(100_000)
            .build();
        Self { cache }
    }
}

impl fmt::Debug for MemorySessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySessionStore")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, user_id: i64) -> SessionId {
        let id = SessionId::generate();
        self.cache.insert(id.clone(), Session { user_id }).await;
        tracing::debug!(user_id, "session created");
        id
    }

    async fn get(&self, id: &SessionId) -> Option<Session> {
        self.cache.get(id).await
    }

    async fn destroy(&self, id: &SessionId) {
        self.cache.invalidate(id).await;
    }
}
