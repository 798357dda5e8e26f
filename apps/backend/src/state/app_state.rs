use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::session_config::SessionConfig;
use crate::auth::session::{MemorySessionStore, SessionStore};

/// Shared resources handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in some test scenarios)
    pub db: Option<DatabaseConnection>,
    pub sessions: Arc<dyn SessionStore>,
    pub session_config: SessionConfig,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        sessions: Arc<dyn SessionStore>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            db,
            sessions,
            session_config,
        }
    }

    /// In-memory sessions with the configured lifetime.
    pub fn with_memory_sessions(db: Option<DatabaseConnection>, session_config: SessionConfig) -> Self {
        let sessions = Arc::new(MemorySessionStore::new(session_config.max_age));
        Self::new(db, sessions, session_config)
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
